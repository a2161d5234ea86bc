use super::{
    dispatcher::{FetchMessage, FetchOutcome, FetchRequest, RequestKind, SearchPurpose},
    pager::Pager,
};
use crate::api::common_types::{CardDetail, CardSummary};

pub const INPUT_CHAR_LIMIT: usize = 156;
pub const NOT_FOUND_MESSAGE: &str = "No cards found";

/// User intent, already decoded from raw key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Erase,
    Submit,
    SelectPrevious,
    SelectNext,
    PageLeft,
    PageRight,
    Confirm,
    Back,
}

/// Result list state: every page fetched so far and the highlighted row of the
/// visible window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Browse {
    pager: Pager,
    /// Index within the current window, `None` when the window is empty.
    selected: Option<usize>,
}

impl Browse {
    fn new(pager: Pager) -> Self {
        let mut browse = Self {
            pager,
            selected: None,
        };
        browse.reset_selection();
        browse
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&CardSummary> {
        self.pager.current_window().get(self.selected?)
    }

    fn reset_selection(&mut self) {
        self.selected = (!self.pager.current_window().is_empty()).then_some(0);
    }

    fn select_next(&mut self) {
        let len = self.pager.current_window().len();
        if len == 0 {
            return;
        }

        self.selected = Some(match self.selected {
            Some(selected) if selected + 1 < len => selected + 1,
            _ => 0,
        });
    }

    fn select_previous(&mut self) {
        let len = self.pager.current_window().len();
        if len == 0 {
            return;
        }

        self.selected = Some(match self.selected {
            Some(selected) if selected > 0 && selected < len => selected - 1,
            _ => len - 1,
        });
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Search {
        input: String,
    },
    Results(Browse),
    Detail {
        card: CardDetail,
        /// Results the card was opened from, `None` for a direct identifier lookup.
        origin: Option<Browse>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Self::Search {
            input: String::new(),
        }
    }
}

/// Navigation state machine of the lookup screen.
///
/// Every user action and every fetch result goes through [`Session::handle`] or
/// [`Session::apply`]; both hand back at most one request to dispatch. `busy`
/// is set exactly when a request is handed out and cleared by the message that
/// answers it, so at most one fetch is ever outstanding.
pub struct Session {
    mode: Mode,
    query: String,
    busy: bool,
    pending_error: Option<String>,
    /// Bumped whenever result state is thrown away; results of older
    /// generations are dropped on arrival.
    generation: u64,
    page_size: usize,
}

impl Session {
    pub fn new(page_size: usize) -> Self {
        Self {
            mode: Mode::default(),
            query: String::new(),
            busy: false,
            pending_error: None,
            generation: 0,
            page_size,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    pub fn handle(&mut self, action: Action) -> Option<FetchRequest> {
        log::debug!("Handling action: {action:?}");

        self.pending_error = None;

        match action {
            Action::Type(char) => {
                if let Mode::Search { input } = &mut self.mode {
                    if input.chars().count() < INPUT_CHAR_LIMIT {
                        input.push(char);
                    }
                }
                None
            }
            Action::Erase => {
                if let Mode::Search { input } = &mut self.mode {
                    input.pop();
                }
                None
            }
            Action::Submit => self.submit(),
            Action::SelectPrevious => {
                if let Mode::Results(browse) = &mut self.mode {
                    browse.select_previous();
                }
                None
            }
            Action::SelectNext => {
                if let Mode::Results(browse) = &mut self.mode {
                    browse.select_next();
                }
                None
            }
            Action::PageLeft => {
                self.page_left();
                None
            }
            Action::PageRight => self.page_right(),
            Action::Confirm => self.confirm(),
            Action::Back => {
                self.back();
                None
            }
        }
    }

    pub fn apply(&mut self, message: FetchMessage) -> Option<FetchRequest> {
        let FetchMessage { request, outcome } = message;

        self.busy = false;

        if request.generation != self.generation {
            log::debug!(
                "Ignoring stale fetch result from generation {} (current {})",
                request.generation,
                self.generation
            );
            return None;
        }

        match outcome {
            FetchOutcome::Failure { cause } => {
                log::error!("Received fetch failure: {cause}");
                self.pending_error = Some(cause.to_string());
                None
            }
            FetchOutcome::SearchResult {
                records,
                next_cursor,
            } => match request.kind {
                RequestKind::Search { purpose, .. } => {
                    log::info!(
                        "Received {} search results, next cursor: {next_cursor}",
                        records.len()
                    );
                    self.apply_search_page(purpose, records, next_cursor)
                }
                RequestKind::Card { id } => {
                    log::warn!("Card request {id} answered with a result list, ignoring");
                    None
                }
            },
            FetchOutcome::DetailResult { card } => {
                self.show_card(card);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<FetchRequest> {
        let Mode::Search { input } = &self.mode else {
            return None;
        };

        if input.is_empty() {
            return None;
        }

        if self.busy {
            log::debug!("Submit ignored, a fetch is still outstanding");
            return None;
        }

        let query = input.clone();
        log::info!("Initiating search for query: {query}");

        self.generation += 1;
        self.query = query.clone();

        self.dispatch(RequestKind::Search {
            query,
            start: 0,
            purpose: SearchPurpose::Initial,
        })
    }

    fn page_left(&mut self) {
        if self.busy {
            return;
        }

        if let Mode::Results(browse) = &mut self.mode {
            if browse.pager.retreat() {
                browse.reset_selection();
                log::debug!("Moved to page {}", browse.pager.current_page());
            }
        }
    }

    fn page_right(&mut self) -> Option<FetchRequest> {
        if self.busy {
            return None;
        }

        let Mode::Results(browse) = &mut self.mode else {
            return None;
        };

        let fill_needed = browse.pager.needs_fetch_to_fill(browse.pager.current_page());

        if !fill_needed && browse.pager.advance() {
            browse.reset_selection();
            log::debug!("Moved to page {}", browse.pager.current_page());
            return self.auto_fill();
        }

        if !browse.pager.has_more() {
            return None;
        }

        let start = browse.pager.cursor();
        let purpose = if fill_needed {
            SearchPurpose::Fill
        } else {
            SearchPurpose::Advance
        };

        self.search_more(start, purpose)
    }

    fn confirm(&mut self) -> Option<FetchRequest> {
        if self.busy {
            return None;
        }

        let Mode::Results(browse) = &self.mode else {
            return None;
        };

        let Some(card) = browse.selected_card() else {
            log::debug!("Confirm ignored, selection {:?} is out of range", browse.selected);
            return None;
        };

        log::info!("Viewing card details for card id: {}", card.id);
        let id = card.id;

        self.dispatch(RequestKind::Card { id })
    }

    fn back(&mut self) {
        match std::mem::take(&mut self.mode) {
            Mode::Detail {
                origin: Some(browse),
                ..
            } => {
                log::info!("Returning to search results");
                self.mode = Mode::Results(browse);
            }
            Mode::Detail { origin: None, .. } | Mode::Results(_) => {
                log::info!("Returning to search input");
                self.generation += 1;
                self.mode = Mode::Search {
                    input: self.query.clone(),
                };
            }
            search @ Mode::Search { .. } => self.mode = search,
        }
    }

    fn apply_search_page(
        &mut self,
        purpose: SearchPurpose,
        records: Vec<CardSummary>,
        next_cursor: u64,
    ) -> Option<FetchRequest> {
        if matches!(self.mode, Mode::Search { .. }) {
            let mut pager = Pager::new(self.page_size);
            pager.append_page(records, next_cursor);

            let found = !pager.is_empty();
            self.mode = Mode::Results(Browse::new(pager));

            if !found {
                log::warn!("No results found for query: {}", self.query);
                self.pending_error = Some(NOT_FOUND_MESSAGE.to_string());
                return None;
            }

            return self.auto_fill();
        }

        let Mode::Results(browse) = &mut self.mode else {
            log::warn!("Search result arrived outside of the results view, ignoring");
            return None;
        };

        let received = records.len();
        browse.pager.append_page(records, next_cursor);

        if purpose == SearchPurpose::Advance && browse.pager.advance() {
            browse.reset_selection();
            log::debug!("Moved to page {}", browse.pager.current_page());
        }

        // An empty top-up would just be requested again.
        if purpose == SearchPurpose::Fill && received == 0 {
            return None;
        }

        self.auto_fill()
    }

    fn show_card(&mut self, card: CardDetail) {
        log::info!("Showing card details for card id: {}", card.id);

        self.mode = match std::mem::take(&mut self.mode) {
            Mode::Search { .. } => Mode::Detail { card, origin: None },
            Mode::Results(browse) => Mode::Detail {
                card,
                origin: Some(browse),
            },
            Mode::Detail { origin, .. } => Mode::Detail { card, origin },
        };
    }

    fn auto_fill(&mut self) -> Option<FetchRequest> {
        if self.busy {
            return None;
        }

        let Mode::Results(browse) = &self.mode else {
            return None;
        };

        let page = browse.pager.current_page();
        if !browse.pager.needs_fetch_to_fill(page) {
            return None;
        }

        let start = browse.pager.cursor();
        log::info!("Auto-filling page {page} from cursor {start}");

        self.search_more(start, SearchPurpose::Fill)
    }

    fn search_more(&mut self, start: u64, purpose: SearchPurpose) -> Option<FetchRequest> {
        self.dispatch(RequestKind::Search {
            query: self.query.clone(),
            start,
            purpose,
        })
    }

    fn dispatch(&mut self, kind: RequestKind) -> Option<FetchRequest> {
        self.busy = true;

        Some(FetchRequest {
            generation: self.generation,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{
        api::{
            catalog::mock::CatalogApiMock,
            common_types::{CardId, END_OF_RESULTS},
            error::CatalogError,
        },
        screen::lookup::dispatcher::execute,
    };

    const PAGE_SIZE: usize = 10;

    fn summaries(ids: std::ops::Range<CardId>) -> Vec<CardSummary> {
        ids.map(|id| CardSummary {
            id,
            display_name: format!("Dragon {id}"),
        })
        .collect()
    }

    fn card(id: CardId) -> CardDetail {
        CardDetail {
            id,
            name: format!("Card {id}"),
            ..Default::default()
        }
    }

    fn type_text(session: &mut Session, text: &str) {
        for char in text.chars() {
            assert_eq!(session.handle(Action::Type(char)), None);
        }
    }

    fn submit(session: &mut Session, text: &str) -> FetchRequest {
        type_text(session, text);
        session.handle(Action::Submit).expect("submit should dispatch")
    }

    fn answer(request: FetchRequest, outcome: FetchOutcome) -> FetchMessage {
        FetchMessage { request, outcome }
    }

    fn search_result(request: FetchRequest, records: Vec<CardSummary>, next: u64) -> FetchMessage {
        answer(
            request,
            FetchOutcome::SearchResult {
                records,
                next_cursor: next,
            },
        )
    }

    fn browse(session: &Session) -> &Browse {
        match session.mode() {
            Mode::Results(browse) => browse,
            other => panic!("expected results mode, got {other:?}"),
        }
    }

    fn window_ids(session: &Session) -> Vec<CardId> {
        browse(session)
            .pager()
            .current_window()
            .iter()
            .map(|card| card.id)
            .collect()
    }

    /// Answers requests from the mock catalog until the session stops asking.
    async fn settle(session: &mut Session, api: &CatalogApiMock, request: Option<FetchRequest>) {
        let mut request = request;

        while let Some(current) = request.take() {
            assert!(session.is_busy());

            let outcome = execute(api, &current.kind).await;
            request = session.apply(answer(current, outcome));

            assert_eq!(session.is_busy(), request.is_some());
        }
    }

    #[test]
    fn test_submit_dispatches_first_page_and_sets_busy() {
        let mut session = Session::new(PAGE_SIZE);

        let request = submit(&mut session, "Dragon");

        assert_eq!(
            request.kind,
            RequestKind::Search {
                query: "Dragon".to_string(),
                start: 0,
                purpose: SearchPurpose::Initial,
            }
        );
        assert!(session.is_busy());
        assert_eq!(session.query(), "Dragon");
        assert!(matches!(session.mode(), Mode::Search { .. }));
    }

    #[test]
    fn test_submit_requires_text_and_idle_session() {
        let mut session = Session::new(PAGE_SIZE);
        assert_eq!(session.handle(Action::Submit), None);
        assert!(!session.is_busy());

        submit(&mut session, "Dragon");
        assert_eq!(session.handle(Action::Submit), None);
    }

    #[test]
    fn test_input_editing_respects_char_limit() {
        let mut session = Session::new(PAGE_SIZE);
        type_text(&mut session, &"x".repeat(INPUT_CHAR_LIMIT + 10));
        session.handle(Action::Erase);

        match session.mode() {
            Mode::Search { input } => assert_eq!(input.chars().count(), INPUT_CHAR_LIMIT - 1),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn test_dragon_scenario_auto_fills_short_second_page() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");

        let next = session.apply(search_result(request, summaries(0..12), 12));

        assert_eq!(next, None);
        assert!(!session.is_busy());
        assert_eq!(window_ids(&session), (0..10).collect::<Vec<_>>());
        assert_eq!(browse(&session).selected(), Some(0));

        let fill = session.handle(Action::PageRight).expect("auto-fill expected");
        assert_eq!(browse(&session).pager().current_page(), 1);
        assert_eq!(window_ids(&session), vec![10, 11]);
        assert_eq!(
            fill.kind,
            RequestKind::Search {
                query: "Dragon".to_string(),
                start: 12,
                purpose: SearchPurpose::Fill,
            }
        );
        assert!(session.is_busy());

        assert_eq!(session.apply(search_result(fill, summaries(12..17), 0)), None);
        assert!(!session.is_busy());
        assert_eq!(browse(&session).pager().current_page(), 1);
        assert_eq!(window_ids(&session), (10..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_short_first_page_is_filled_immediately() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");

        let fill = session
            .apply(search_result(request, summaries(0..4), 4))
            .expect("auto-fill expected");

        assert!(matches!(
            fill.kind,
            RequestKind::Search {
                start: 4,
                purpose: SearchPurpose::Fill,
                ..
            }
        ));
        assert!(session.is_busy());
    }

    #[test]
    fn test_empty_fill_does_not_loop() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        let fill = session
            .apply(search_result(request, summaries(0..4), 4))
            .unwrap();

        assert_eq!(session.apply(search_result(fill, vec![], 4)), None);
        assert!(!session.is_busy());

        // Paging right on the short page retries the top-up explicitly.
        let retry = session.handle(Action::PageRight).unwrap();
        assert!(matches!(
            retry.kind,
            RequestKind::Search {
                purpose: SearchPurpose::Fill,
                ..
            }
        ));
    }

    #[test]
    fn test_page_right_past_cached_data_advances_on_arrival() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..10), 10));
        session.handle(Action::SelectNext);

        let advance = session.handle(Action::PageRight).unwrap();
        assert!(matches!(
            advance.kind,
            RequestKind::Search {
                start: 10,
                purpose: SearchPurpose::Advance,
                ..
            }
        ));
        assert_eq!(browse(&session).pager().current_page(), 0);

        assert_eq!(session.apply(search_result(advance, summaries(10..20), 20)), None);
        assert_eq!(browse(&session).pager().current_page(), 1);
        assert_eq!(browse(&session).selected(), Some(0));
        assert_eq!(window_ids(&session), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_right_on_last_page_is_noop() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..7), END_OF_RESULTS));

        assert_eq!(session.handle(Action::PageRight), None);
        assert!(!session.is_busy());
        assert_eq!(browse(&session).pager().current_page(), 0);
    }

    #[test]
    fn test_paging_blocked_while_busy() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..30), 30));
        session.handle(Action::PageRight);
        session.handle(Action::PageRight);
        assert_eq!(browse(&session).pager().current_page(), 2);

        let advance = session.handle(Action::PageRight).unwrap();
        session.handle(Action::PageLeft);
        assert_eq!(session.handle(Action::PageRight), None);
        assert_eq!(session.handle(Action::Confirm), None);
        assert_eq!(browse(&session).pager().current_page(), 2);

        session.apply(search_result(advance, summaries(30..35), 0));
        assert_eq!(browse(&session).pager().current_page(), 3);
    }

    #[test]
    fn test_page_left_restores_identical_window() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..25), END_OF_RESULTS));

        let first = window_ids(&session);
        session.handle(Action::PageRight);
        let second = window_ids(&session);
        session.handle(Action::PageRight);
        session.handle(Action::PageLeft);
        assert_eq!(window_ids(&session), second);
        session.handle(Action::PageLeft);
        assert_eq!(window_ids(&session), first);

        assert_eq!(session.handle(Action::PageLeft), None);
        assert_eq!(browse(&session).pager().current_page(), 0);
    }

    #[test]
    fn test_selection_wraps_within_window() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..3), END_OF_RESULTS));

        session.handle(Action::SelectPrevious);
        assert_eq!(browse(&session).selected(), Some(2));
        session.handle(Action::SelectNext);
        assert_eq!(browse(&session).selected(), Some(0));
        session.handle(Action::SelectNext);
        assert_eq!(browse(&session).selected(), Some(1));
    }

    #[test]
    fn test_numeric_query_routes_to_detail_without_results() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "4007");

        let next = session.apply(answer(
            request,
            FetchOutcome::DetailResult { card: card(4007) },
        ));

        assert_eq!(next, None);
        assert!(!session.is_busy());
        assert_eq!(
            session.mode(),
            &Mode::Detail {
                card: card(4007),
                origin: None,
            }
        );

        session.handle(Action::Back);
        assert_eq!(
            session.mode(),
            &Mode::Search {
                input: "4007".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_result_is_not_found_in_results_mode() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "zzzznotacard");

        let next = session.apply(search_result(request, vec![], END_OF_RESULTS));

        assert_eq!(next, None);
        assert!(!session.is_busy());
        assert_eq!(session.pending_error(), Some(NOT_FOUND_MESSAGE));
        assert!(browse(&session).pager().is_empty());
        assert_eq!(browse(&session).selected(), None);
    }

    #[test]
    fn test_confirm_out_of_range_selection_is_noop() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..3), END_OF_RESULTS));

        if let Mode::Results(browse) = &mut session.mode {
            browse.selected = Some(42);
        }

        assert_eq!(session.handle(Action::Confirm), None);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_drill_in_and_out_restores_page_and_selection() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..15), END_OF_RESULTS));
        session.handle(Action::PageRight);
        session.handle(Action::SelectNext);
        session.handle(Action::SelectNext);
        let before = browse(&session).clone();

        let detail = session.handle(Action::Confirm).unwrap();
        assert_eq!(detail.kind, RequestKind::Card { id: 12 });
        assert!(session.is_busy());

        session.apply(answer(detail, FetchOutcome::DetailResult { card: card(12) }));
        assert!(!session.is_busy());
        assert!(matches!(session.mode(), Mode::Detail { card, .. } if card.id == 12));

        session.handle(Action::Back);
        assert_eq!(browse(&session), &before);

        session.handle(Action::Back);
        assert!(matches!(session.mode(), Mode::Search { input } if input == "Dragon"));
    }

    #[test]
    fn test_failure_keeps_mode_and_clears_busy() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..10), 10));
        let advance = session.handle(Action::PageRight).unwrap();

        let next = session.apply(answer(
            advance,
            FetchOutcome::Failure {
                cause: CatalogError::Transport("timed out".to_string()),
            },
        ));

        assert_eq!(next, None);
        assert!(!session.is_busy());
        assert_eq!(
            session.pending_error(),
            Some("failed to reach the catalog service: timed out")
        );
        assert_eq!(browse(&session).pager().current_page(), 0);

        session.handle(Action::SelectNext);
        assert_eq!(session.pending_error(), None);
    }

    #[test]
    fn test_failure_in_search_mode_keeps_input() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "4007");

        session.apply(answer(
            request,
            FetchOutcome::Failure {
                cause: CatalogError::NotFound(4007),
            },
        ));

        assert!(!session.is_busy());
        assert_eq!(
            session.mode(),
            &Mode::Search {
                input: "4007".to_string(),
            }
        );
        assert!(session.pending_error().is_some());
        assert!(session.handle(Action::Submit).is_some());
    }

    #[test]
    fn test_back_to_search_clears_results_and_drops_late_result() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..12), 12));
        let fill = session.handle(Action::PageRight).unwrap();

        session.handle(Action::Back);
        assert!(matches!(session.mode(), Mode::Search { .. }));
        assert!(session.is_busy());
        assert_eq!(session.handle(Action::Submit), None);

        assert_eq!(session.apply(search_result(fill, summaries(12..20), 0)), None);
        assert!(!session.is_busy());
        assert!(matches!(session.mode(), Mode::Search { input } if input == "Dragon"));

        let resubmitted = session.handle(Action::Submit).unwrap();
        assert_eq!(
            resubmitted.kind,
            RequestKind::Search {
                query: "Dragon".to_string(),
                start: 0,
                purpose: SearchPurpose::Initial,
            }
        );
    }

    #[test]
    fn test_late_detail_after_leaving_results_is_ignored() {
        let mut session = Session::new(PAGE_SIZE);
        let request = submit(&mut session, "Dragon");
        session.apply(search_result(request, summaries(0..5), END_OF_RESULTS));
        let detail = session.handle(Action::Confirm).unwrap();

        session.handle(Action::Back);
        session.apply(answer(detail, FetchOutcome::DetailResult { card: card(0) }));

        assert!(!session.is_busy());
        assert!(matches!(session.mode(), Mode::Search { .. }));
    }

    #[tokio::test]
    async fn test_paging_right_visits_full_pages_until_the_last() {
        let grid = [0usize, 1, 9, 10, 11, 25, 40]
            .into_iter()
            .cartesian_product([3usize, 10, 17])
            .cartesian_product([4usize, 10]);

        for ((total, server_page), page_size) in grid {
            let api = CatalogApiMock::with_cards("Card", total, server_page);
            let mut session = Session::new(page_size);

            let request = submit(&mut session, "card");
            settle(&mut session, &api, Some(request)).await;

            if total == 0 {
                assert_eq!(session.pending_error(), Some(NOT_FOUND_MESSAGE));
                continue;
            }

            let mut visited = vec![window_ids(&session)];
            loop {
                let before = browse(&session).pager().current_page();
                let request = session.handle(Action::PageRight);
                settle(&mut session, &api, request).await;

                let after = browse(&session).pager().current_page();
                assert!(after >= before);
                if after == before {
                    break;
                }
                visited.push(window_ids(&session));
            }

            let pager = browse(&session).pager();
            assert!(!pager.has_more());

            let (last, full) = visited.split_last().unwrap();
            assert!(full.iter().all(|window| window.len() == page_size));
            assert!(!last.is_empty() && last.len() <= page_size);

            let seen: Vec<_> = visited.iter().flatten().copied().collect();
            let expected: Vec<_> = (0..total as CardId).map(|n| 1000 + n).collect();
            assert_eq!(seen, expected, "total {total}, server page {server_page}");

            for window in visited.iter().rev().skip(1) {
                assert_eq!(session.handle(Action::PageLeft), None);
                assert_eq!(&window_ids(&session), window);
            }
            assert_eq!(api.search_calls(), total.div_ceil(server_page).max(1));
        }
    }
}
