use iced::Task;

use super::event::{MapEffect, MapEvent, MapIntent};
use super::state::MapState;

/// Reduce a map intent into viewport updates and effect events.
pub(super) fn reduce(state: &mut MapState, event: MapIntent) -> Task<MapEvent> {
    match event {
        MapIntent::Pan(delta) => {
            state.viewport_mut().pan_by(delta);
            camera_changed(state)
        },
        MapIntent::Zoom(delta) => {
            if state.viewport_mut().zoom_by(delta) {
                state.sync_tile_cache();
                camera_changed(state)
            } else {
                Task::none()
            }
        },
        MapIntent::ActiveLayerChanged(id) => {
            state.viewport_mut().set_active_layer(id.as_str());
            Task::none()
        },
    }
}

fn camera_changed(state: &MapState) -> Task<MapEvent> {
    let viewport = state.viewport();
    Task::done(MapEvent::Effect(MapEffect::CameraChanged {
        center: viewport.center(),
        zoom: viewport.zoom(),
    }))
}
