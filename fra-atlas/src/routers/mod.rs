use fra_atlas_ui_layers::LayerId;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::map::{MapEvent, MapIntent};

pub(crate) mod keyboard;
pub(crate) mod layers;
pub(crate) mod map;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => sync_active_layer(app),
        // Layers widget
        AppEvent::Layers(event) => layers::route(app, event),
        // Map widget
        AppEvent::Map(event) => map::route(app, event),
        // Direct operations
        AppEvent::Keyboard(event) => keyboard::route(event),
    }
}

/// Hand the startup selection to the map.
fn sync_active_layer(app: &App) -> Task<AppEvent> {
    let active = app.widgets.layers.active();
    if active.is_empty() {
        return Task::none();
    }

    Task::done(AppEvent::Map(MapEvent::Intent(
        MapIntent::ActiveLayerChanged(LayerId::from(active)),
    )))
}
