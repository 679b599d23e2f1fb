use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::map::{MapEffect, MapEvent, MapIntent};

/// Route a map event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: MapEvent) -> Task<AppEvent> {
    match event {
        MapEvent::Intent(event) => route_intent(app, event),
        MapEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: MapIntent) -> Task<AppEvent> {
    app.widgets.map.reduce(event).map(AppEvent::Map)
}

fn route_effect(effect: MapEffect) -> Task<AppEvent> {
    match effect {
        MapEffect::CameraChanged { center, zoom } => {
            log::debug!("map camera moved to {center} at zoom {zoom}");
            Task::none()
        },
    }
}
