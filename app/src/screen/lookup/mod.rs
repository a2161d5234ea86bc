use std::sync::Arc;

use ratatui::{Frame, crossterm::event::Event};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{OutgoingMessage, ScreenT, resources::Resources};
use crate::api::catalog::CatalogApiT;
use dispatcher::{Dispatcher, FetchMessage, FetchRequest, RequestKind};
use session::{Action, Session};

mod controller;
mod dispatcher;
mod pager;
mod session;
mod view;

pub const PAGE_SIZE: usize = 10;

/// Card lookup screen: search input, paged results and card details.
pub struct Model<A: CatalogApiT> {
    session: Session,
    show_navigation_help: bool,
    /// First visible line of the card details.
    detail_scroll: u16,
    /// Status shown while the outstanding fetch is running.
    loading_label: &'static str,

    dispatcher: Dispatcher<A>,
    messages: UnboundedReceiver<FetchMessage>,
}

impl<A: CatalogApiT> Model<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (dispatcher, messages) = Dispatcher::new(api);

        Self {
            session: Session::new(PAGE_SIZE),
            show_navigation_help: false,
            detail_scroll: 0,
            loading_label: "",

            dispatcher,
            messages,
        }
    }

    fn tick_logic(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            let request = self.session.apply(message);
            self.dispatch(request);
        }
    }

    fn perform(&mut self, action: Action) {
        let request = self.session.handle(action);
        self.dispatch(request);
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };

        self.loading_label = match request.kind {
            RequestKind::Search { .. } => "Searching…",
            RequestKind::Card { .. } => "Loading…",
        };

        self.dispatcher.dispatch(request);
    }
}

impl<A: CatalogApiT> ScreenT for Model<A> {
    fn render(&self, frame: &mut Frame<'_>, resources: &Resources) {
        view::render(self, frame, resources);
    }

    async fn tick(&mut self, event: Option<Event>) -> Option<OutgoingMessage> {
        self.tick_logic();

        controller::process_input(event.as_ref()?, self)
    }
}
