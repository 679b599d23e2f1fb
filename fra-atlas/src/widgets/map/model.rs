use fra_atlas_ui_map::{MapViewport, TileCache};

pub(crate) const INFO_ACTIVE_LAYER_LABEL: &str = "Active Layer:";
pub(crate) const INFO_COORDINATES_LABEL: &str = "Coordinates:";
pub(crate) const INFO_ZOOM_LABEL: &str = "Zoom Level:";
pub(crate) const INFO_SCALE_LABEL: &str = "Scale:";
pub(crate) const NO_SCALE_LABEL: &str = "-";

/// Read-only view model for the map widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MapViewModel<'a> {
    pub(crate) viewport: &'a MapViewport,
    pub(crate) tile_cache: Option<&'a TileCache>,
}

impl MapViewModel<'_> {
    /// Centre formatted as `23.2599°N, 77.4126°E`.
    pub(crate) fn coordinates_label(&self) -> String {
        self.viewport.center().to_string()
    }

    pub(crate) fn zoom_label(&self) -> String {
        self.viewport.zoom().to_string()
    }

    /// Scale bar distance, or [`NO_SCALE_LABEL`] without a scale control.
    pub(crate) fn scale_label(&self) -> String {
        self.viewport
            .scale_bar()
            .map(|bar| bar.label)
            .unwrap_or_else(|| String::from(NO_SCALE_LABEL))
    }
}
