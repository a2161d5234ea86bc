pub use ratatui::crossterm::event::{Event, KeyCode};
use ratatui::crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};

pub trait InputMappingT: Sized {
    fn get_mapping() -> InputMapping;

    fn map_event(event: Event) -> Option<Self>;
}

#[derive(Debug)]
pub struct InputMapping {
    pub mapping: Vec<MappingEntry>,
}

impl InputMapping {
    pub fn merge(mut self, mut other: InputMapping) -> Self {
        self.mapping.append(&mut other.mapping);
        self
    }
}

#[derive(Debug)]
pub struct MappingEntry {
    pub key: KeyCode,
    pub description: String,
}

impl MappingEntry {
    pub fn key_label(&self) -> String {
        match self.key {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(char) => char.to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }
}

/// Key code of a press (or auto-repeat) event. Releases, non-key events and
/// `Ctrl`/`Alt` chords yield `None`.
pub fn pressed_key(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(*code),
        _ => None,
    }
}
