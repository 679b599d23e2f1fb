//! Tiled Web Mercator map viewport for [`iced`] applications.
//!
//! - [`MapViewport`]: centre, zoom and attached controls. Mounting attaches
//!   the zoom and scale controls; unmounting (or dropping) detaches them.
//! - [`TileSource`]: slippy tile template, attribution and zoom bounds.
//! - [`MapView`]: stateless view stacking a [`MapCanvas`] with the zoom
//!   buttons.
//!
//! Tiles are read from an optional on-disk `{z}/{x}/{y}.png`
//! [`TileCache`]. Tiles missing from the cache are drawn as labelled
//! placeholders and their source URL is logged at debug level.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::{Element, Vector};
//! use fra_atlas_ui_map::{MapOptions, MapView, MapViewport};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Zoom(i8),
//!     Pan(Vector),
//! }
//!
//! struct State {
//!     viewport: MapViewport,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Zoom(delta) => {
//!             state.viewport.zoom_by(delta);
//!         },
//!         Message::Pan(delta) => state.viewport.pan_by(delta),
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     MapView::new(&state.viewport)
//!         .on_zoom(Message::Zoom)
//!         .on_pan(Message::Pan)
//!         .view()
//! }
//!
//! let _state = State {
//!     viewport: MapViewport::mount(MapOptions::default()),
//! };
//! ```

mod canvas;
mod controls;
mod error;
mod geo;
mod tile_cache;
mod tile_source;
mod view;
mod viewport;

pub use canvas::{MapCanvas, MapCanvasState};
pub use controls::{
    ControlPosition, MapControls, ScaleBar, ScaleControl, ZoomControl,
    round_distance,
};
pub use error::MapError;
pub use geo::{
    EARTH_CIRCUMFERENCE_M, LatLng, MAX_LATITUDE, MAX_TILE_ZOOM, TileCoord,
    lat_lng_to_tile, meters_per_pixel, project, tile_to_lat_lng,
    tiles_per_axis, unproject, world_size,
};
pub use tile_cache::TileCache;
pub use tile_source::{OSM_ATTRIBUTION, OSM_URL_TEMPLATE, TileSource};
pub use view::{DEFAULT_MAP_HEIGHT, MapView};
pub use viewport::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MapOptions, MapViewport, VisibleTile,
};
