use input_mapping_common::{InputMapping, InputMappingT};
use input_mapping_derive::InputMapping;
use ratatui::crossterm::event::Event;

use super::{
    Model,
    session::{Action, Mode},
    view,
};
use crate::{
    api::{catalog::CatalogApiT, common_types::CardDetail},
    screen::{OutgoingMessage, common},
};

#[derive(InputMapping)]
pub enum SearchInputEvent {
    #[key = "KeyCode::Enter"]
    #[description = "Search by name or card id"]
    Submit,

    #[key = "KeyCode::Backspace"]
    #[description = "Erase last character"]
    Erase,

    #[key = "KeyCode::Esc"]
    #[description = "Quit application"]
    Quit,
}

#[derive(InputMapping)]
pub enum ResultsInputEvent {
    #[key = "KeyCode::Up"]
    #[description = "Navigate up in list"]
    Up,

    #[key = "KeyCode::Down"]
    #[description = "Navigate down in list"]
    Down,

    #[key = "KeyCode::Left"]
    #[description = "Previous page"]
    PreviousPage,

    #[key = "KeyCode::Right"]
    #[description = "Next page"]
    NextPage,

    #[key = "KeyCode::Enter"]
    #[description = "Show card details"]
    Open,

    #[key = "KeyCode::Esc"]
    #[description = "Back to search"]
    Back,

    #[key = 'h']
    #[description = "Open/close navigation help"]
    NavigationHelp,
}

#[derive(InputMapping)]
pub enum DetailInputEvent {
    #[key = "KeyCode::Up"]
    #[description = "Scroll up"]
    ScrollUp,

    #[key = "KeyCode::Down"]
    #[description = "Scroll down"]
    ScrollDown,

    #[key = "KeyCode::Esc"]
    #[description = "Back"]
    Back,

    #[key = "KeyCode::Enter"]
    #[description = "Back"]
    Close,

    #[key = 'h']
    #[description = "Open/close navigation help"]
    NavigationHelp,
}

/// Key bindings active in `mode`, as listed by the help line and overlay.
pub(super) fn mapping_for(mode: &Mode) -> InputMapping {
    match mode {
        Mode::Search { .. } => SearchInputEvent::get_mapping(),
        Mode::Results(_) => ResultsInputEvent::get_mapping(),
        Mode::Detail { .. } => DetailInputEvent::get_mapping(),
    }
}

pub(super) fn process_input<A: CatalogApiT>(
    event: &Event,
    model: &mut Model<A>,
) -> Option<OutgoingMessage> {
    if common::is_interrupt(event) {
        log::info!("Interrupted by user");
        return Some(OutgoingMessage::Exit);
    }

    let action = match model.session.mode() {
        Mode::Search { .. } => match SearchInputEvent::map_event(event.clone()) {
            Some(SearchInputEvent::Submit) => Action::Submit,
            Some(SearchInputEvent::Erase) => Action::Erase,
            Some(SearchInputEvent::Quit) => return Some(OutgoingMessage::Exit),
            None => Action::Type(common::typed_char(event)?),
        },
        Mode::Results(_) => match ResultsInputEvent::map_event(event.clone())? {
            ResultsInputEvent::Up => Action::SelectPrevious,
            ResultsInputEvent::Down => Action::SelectNext,
            ResultsInputEvent::PreviousPage => Action::PageLeft,
            ResultsInputEvent::NextPage => Action::PageRight,
            ResultsInputEvent::Open => Action::Confirm,
            ResultsInputEvent::Back => Action::Back,
            ResultsInputEvent::NavigationHelp => {
                model.show_navigation_help ^= true;
                return None;
            }
        },
        Mode::Detail { card, .. } => match DetailInputEvent::map_event(event.clone())? {
            DetailInputEvent::ScrollUp => {
                model.detail_scroll = model.detail_scroll.saturating_sub(1);
                return None;
            }
            DetailInputEvent::ScrollDown => {
                model.detail_scroll = model.detail_scroll.saturating_add(1).min(scroll_limit(card));
                return None;
            }
            DetailInputEvent::Back | DetailInputEvent::Close => Action::Back,
            DetailInputEvent::NavigationHelp => {
                model.show_navigation_help ^= true;
                return None;
            }
        },
    };

    model.perform(action);

    match model.session.mode() {
        Mode::Search { .. } => {
            model.show_navigation_help = false;
            model.detail_scroll = 0;
        }
        Mode::Results(_) => model.detail_scroll = 0,
        Mode::Detail { .. } => {}
    }

    None
}

/// Scrolling stops once the last line reaches the top of the view.
fn scroll_limit(card: &CardDetail) -> u16 {
    let lines = view::card_detail_lines(card).len().saturating_sub(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}
