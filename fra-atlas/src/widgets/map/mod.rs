mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::path::PathBuf;

pub(crate) use event::{MapEffect, MapEvent, MapIntent};
use fra_atlas_ui_map::MapOptions;
use iced::Task;
pub(crate) use model::MapViewModel;
use state::MapState;

/// Map widget owning the mounted viewport.
///
/// Dropping the widget drops the viewport, which detaches its controls.
pub(crate) struct MapWidget {
    state: MapState,
}

impl MapWidget {
    /// Mount a viewport with `options`, drawing tiles from `tile_cache`.
    pub(crate) fn new(
        options: MapOptions,
        tile_cache: Option<PathBuf>,
    ) -> Self {
        Self {
            state: MapState::new(options, tile_cache),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: MapIntent) -> Task<MapEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> MapViewModel<'_> {
        MapViewModel {
            viewport: self.state.viewport(),
            tile_cache: self.state.tile_cache(),
        }
    }
}
