#![cfg(test)]

use std::collections::HashMap;

use input_mapping_common::InputMappingT;
use input_mapping_derive::InputMapping;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};

#[derive(InputMapping, Debug, PartialEq)]
enum TestEnum {
    #[key = 'a']
    One,

    #[description = "test"]
    Two,

    Nested(Nested),
}

#[derive(InputMapping, Debug, PartialEq)]
enum Nested {
    #[description = "four_test"]
    Four,

    #[key = "KeyCode::Up"]
    #[description = "up"]
    Five,

    Six,
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_input_mapping_generated_as_expected() {
    let mapping = TestEnum::get_mapping();
    let mapping: HashMap<_, _> = mapping
        .mapping
        .into_iter()
        .map(|map| (map.key, map.description))
        .collect();

    assert_eq!(mapping.len(), 5);
    assert_eq!(mapping.get(&KeyCode::Char('a')), Some(&"".to_string()));
    assert_eq!(
        mapping.get(&KeyCode::Char('f')),
        Some(&"four_test".to_string())
    );
    assert_eq!(mapping.get(&KeyCode::Char('t')), Some(&"test".to_string()));
    assert_eq!(mapping.get(&KeyCode::Char('s')), Some(&"".to_string()));
    assert_eq!(mapping.get(&KeyCode::Up), Some(&"up".to_string()));
}

#[test]
fn test_mapping_keeps_declaration_order() {
    let keys: Vec<_> = TestEnum::get_mapping()
        .mapping
        .into_iter()
        .map(|map| map.key)
        .collect();

    assert_eq!(
        keys,
        vec![
            KeyCode::Char('a'),
            KeyCode::Char('t'),
            KeyCode::Char('f'),
            KeyCode::Up,
            KeyCode::Char('s'),
        ]
    );
}

#[test]
fn test_map_event_resolves_direct_and_nested_variants() {
    assert_eq!(
        TestEnum::map_event(press(KeyCode::Char('a'))),
        Some(TestEnum::One)
    );
    assert_eq!(
        TestEnum::map_event(press(KeyCode::Char('t'))),
        Some(TestEnum::Two)
    );
    assert_eq!(
        TestEnum::map_event(press(KeyCode::Up)),
        Some(TestEnum::Nested(Nested::Five))
    );
    assert_eq!(
        TestEnum::map_event(press(KeyCode::Char('s'))),
        Some(TestEnum::Nested(Nested::Six))
    );
    assert_eq!(TestEnum::map_event(press(KeyCode::Char('z'))), None);
}

#[test]
fn test_map_event_ignores_key_release_and_non_key_events() {
    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert_eq!(TestEnum::map_event(release), None);
    assert_eq!(TestEnum::map_event(Event::FocusGained), None);
    assert_eq!(TestEnum::map_event(Event::Resize(80, 24)), None);
}

#[test]
fn test_map_event_ignores_control_and_alt_chords() {
    let chord = |code, modifiers| Event::Key(KeyEvent::new(code, modifiers));

    assert_eq!(TestEnum::map_event(chord(KeyCode::Char('a'), KeyModifiers::CONTROL)), None);
    assert_eq!(TestEnum::map_event(chord(KeyCode::Up, KeyModifiers::ALT)), None);
    assert_eq!(
        TestEnum::map_event(chord(KeyCode::Up, KeyModifiers::SHIFT)),
        Some(TestEnum::Nested(Nested::Five))
    );
}
