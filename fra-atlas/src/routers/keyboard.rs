use iced::Task;
use iced::keyboard::{self, Key, key};

use crate::app::AppEvent;
use crate::widgets::layers::{LayersEvent, LayersIntent};
use crate::widgets::map::{MapEvent, MapIntent};

/// Translate app-wide key presses into widget intents.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };
    if modifiers.command() || modifiers.alt() {
        return Task::none();
    }

    match event_for_key(&key) {
        Some(event) => Task::done(event),
        None => Task::none(),
    }
}

/// Up/Down move the layer focus ring, Enter/Space activate it, Escape
/// clears it. `+`/`-` zoom the map.
fn event_for_key(key: &Key) -> Option<AppEvent> {
    let layers = |intent| Some(AppEvent::Layers(LayersEvent::Intent(intent)));
    let map = |intent| Some(AppEvent::Map(MapEvent::Intent(intent)));

    match key.as_ref() {
        Key::Named(key::Named::ArrowDown) => layers(LayersIntent::FocusNext),
        Key::Named(key::Named::ArrowUp) => layers(LayersIntent::FocusPrevious),
        Key::Named(key::Named::Enter | key::Named::Space) => {
            layers(LayersIntent::ActivateFocused)
        },
        Key::Named(key::Named::Escape) => layers(LayersIntent::ClearFocus),
        Key::Character("+" | "=") => map(MapIntent::Zoom(1)),
        Key::Character("-") => map(MapIntent::Zoom(-1)),
        _ => None,
    }
}
