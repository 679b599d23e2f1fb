use fra_atlas_ui_layers::LayerId;
use fra_atlas_ui_map::LatLng;
use iced::Vector;

/// Intent events handled by the map widget.
#[derive(Debug, Clone)]
pub(crate) enum MapIntent {
    /// Drag the map content by a screen-space delta.
    Pan(Vector),
    /// Zoom by whole steps, positive zooms in.
    Zoom(i8),
    /// The active layer changed elsewhere in the app.
    ActiveLayerChanged(LayerId),
}

/// Effect events produced by the map reducer.
#[derive(Debug, Clone)]
pub(crate) enum MapEffect {
    CameraChanged { center: LatLng, zoom: u8 },
}

/// Map event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum MapEvent {
    /// Intent event reduced by the map widget.
    Intent(MapIntent),
    /// External effect orchestrated by app-level routing.
    Effect(MapEffect),
}
