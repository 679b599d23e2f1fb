use std::path::PathBuf;

use fra_atlas_ui_map::{MapOptions, MapViewport, TileCache};

/// Internal runtime state of the map widget.
#[derive(Debug)]
pub(super) struct MapState {
    viewport: MapViewport,
    tile_cache: Option<TileCache>,
}

impl MapState {
    pub(super) fn new(
        options: MapOptions,
        tile_cache: Option<PathBuf>,
    ) -> Self {
        Self {
            viewport: MapViewport::mount(options),
            tile_cache: tile_cache.map(TileCache::new),
        }
    }

    pub(super) fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub(super) fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    pub(super) fn tile_cache(&self) -> Option<&TileCache> {
        self.tile_cache.as_ref()
    }

    /// Drop tile lookups that no longer match the viewport zoom.
    pub(super) fn sync_tile_cache(&mut self) {
        let zoom = self.viewport.zoom();
        if let Some(cache) = self.tile_cache.as_mut() {
            cache.retain_zoom(zoom);
        }
    }
}
