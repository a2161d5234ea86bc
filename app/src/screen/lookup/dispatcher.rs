use std::sync::Arc;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::api::{
    catalog::CatalogApiT,
    common_types::{CardDetail, CardId, CardSummary},
    error::CatalogError,
};

/// What a search fetch is for once it lands in the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPurpose {
    /// First page of a freshly submitted query.
    Initial,
    /// User paged right past the cached data.
    Advance,
    /// Topping up a short trailing page.
    Fill,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Search {
        query: String,
        start: u64,
        purpose: SearchPurpose,
    },
    Card {
        id: CardId,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Session generation the request was issued in.
    pub generation: u64,
    pub kind: RequestKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    SearchResult {
        records: Vec<CardSummary>,
        next_cursor: u64,
    },
    DetailResult {
        card: CardDetail,
    },
    Failure {
        cause: CatalogError,
    },
}

/// Terminal message of one fetch task, echoing the request it answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchMessage {
    pub request: FetchRequest,
    pub outcome: FetchOutcome,
}

/// Runs catalog calls off the event loop.
///
/// Holds no request state: the single-fetch rule is enforced by the session's
/// `busy` flag before anything reaches [`Dispatcher::dispatch`]. Tasks are never
/// cancelled and each one delivers exactly one [`FetchMessage`].
pub struct Dispatcher<A: CatalogApiT> {
    api: Arc<A>,
    sender: UnboundedSender<FetchMessage>,
}

impl<A: CatalogApiT> Dispatcher<A> {
    pub fn new(api: Arc<A>) -> (Self, UnboundedReceiver<FetchMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { api, sender }, receiver)
    }

    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        log::info!("Dispatching fetch: {:?}", request.kind);

        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();

        tokio::task::spawn(async move {
            let kind = request.kind.clone();
            let outcome = tokio::task::spawn(async move { execute(api.as_ref(), &kind).await })
                .await
                .unwrap_or_else(|error| {
                    log::error!("Fetch task failed: {error}");
                    FetchOutcome::Failure {
                        cause: CatalogError::transport(error),
                    }
                });

            if sender.send(FetchMessage { request, outcome }).is_err() {
                log::warn!("Fetch result dropped, event loop is gone");
            }
        })
    }
}

/// Performs the catalog call(s) for one request.
///
/// A first-page search whose text parses as an integer is answered by an
/// identifier lookup instead of a text search.
pub async fn execute<A: CatalogApiT>(api: &A, kind: &RequestKind) -> FetchOutcome {
    let result = match kind {
        RequestKind::Search { query, start, .. } => match parse_card_id(query) {
            Some(id) if *start == 0 => {
                log::info!("Query identified as card id: {id}");
                api.get_card(id).await.map(|card| FetchOutcome::DetailResult { card })
            }
            _ => api.search(query, *start).await.map(|page| FetchOutcome::SearchResult {
                records: page.records,
                next_cursor: page.next,
            }),
        },
        RequestKind::Card { id } => api
            .get_card(*id)
            .await
            .map(|card| FetchOutcome::DetailResult { card }),
    };

    result.unwrap_or_else(|cause| {
        log::error!("Fetch failed: {cause}");
        FetchOutcome::Failure { cause }
    })
}

pub fn parse_card_id(query: &str) -> Option<CardId> {
    query.parse().ok()
}
