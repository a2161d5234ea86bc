use input_mapping_common::InputMapping;
use ratatui::{
    Frame,
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::Stylize,
    text::Text,
    widgets::{Block, BorderType, Borders, Padding},
};

mod background_widget;
pub use background_widget::*;

mod navigation_help_widget;
pub use navigation_help_widget::*;

pub mod card_codes;

use super::resources::Resources;

pub fn render_centered_text(frame: &mut Frame, area: Rect, text: Text) {
    let [area] = Layout::horizontal([Constraint::Length(text.width() as u16)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(text.height() as u16)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(text, area);
}

pub fn render_navigation_help(
    input_mapping: InputMapping,
    frame: &mut Frame<'_>,
    resources: &Resources,
) {
    let area = frame.area();

    let widget = NavigationHelpWidget::new(input_mapping.mapping, resources.accent_color);

    let block_area = area.inner(Margin::new(8, 4));

    let width = widget.min_width().max(block_area.width as usize / 2);
    let height = widget.height();

    let block = Block::new()
        .border_type(BorderType::Double)
        .borders(Borders::all())
        .border_style(resources.main_color)
        .padding(Padding::proportional(1))
        .title("Help")
        .title_alignment(Alignment::Center)
        .reset()
        .bg(resources.background_color)
        .fg(resources.main_color);

    let block_inner = block.inner(block_area);

    let [widget_area] = Layout::horizontal([Constraint::Length(width as u16)])
        .flex(Flex::Center)
        .areas(block_inner);
    let [widget_area] = Layout::vertical([Constraint::Length(height as u16)])
        .flex(Flex::Center)
        .areas(widget_area);

    frame.render_widget(
        BackgroundWidget::new(resources.background_color),
        block_area,
    );
    frame.render_widget(block, block_area);

    frame.render_widget(widget, widget_area);
}

/// `Ctrl+C`, which quits from every view.
pub fn is_interrupt(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Printable character of a key press, ignoring chords with `Ctrl` or `Alt`.
pub fn typed_char(event: &Event) -> Option<char> {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(char),
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(*char),
        _ => None,
    }
}
