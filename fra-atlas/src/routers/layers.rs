use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::layers::{LayersEffect, LayersEvent, LayersIntent};
use crate::widgets::map::{MapEvent, MapIntent};

/// Route a layers event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: LayersEvent) -> Task<AppEvent> {
    match event {
        LayersEvent::Intent(event) => route_intent(app, event),
        LayersEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: LayersIntent) -> Task<AppEvent> {
    app.widgets.layers.reduce(event).map(AppEvent::Layers)
}

fn route_effect(effect: LayersEffect) -> Task<AppEvent> {
    match effect {
        LayersEffect::LayerSelected(id) => {
            log::info!("layer selected: {id}");
            Task::done(AppEvent::Map(MapEvent::Intent(
                MapIntent::ActiveLayerChanged(id),
            )))
        },
    }
}
