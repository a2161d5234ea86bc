use ratatui::{Frame, crossterm::event::Event};
use resources::Resources;

mod common;
pub mod lookup;
pub mod resources;

pub(crate) trait ScreenT {
    fn render(&self, frame: &mut Frame<'_>, resources: &Resources);

    async fn tick(&mut self, event: Option<Event>) -> Option<OutgoingMessage>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutgoingMessage {
    Exit,
}
