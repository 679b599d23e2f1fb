use std::fmt;

use iced::{Point, Size, Vector};

use crate::controls::{MapControls, ScaleBar, ScaleControl, ZoomControl};
use crate::geo::{self, LatLng, TileCoord};
use crate::tile_source::TileSource;

/// Initial map centre (India).
pub const DEFAULT_CENTER: LatLng = LatLng::new(20.5937, 78.9629);
pub const DEFAULT_ZOOM: u8 = 5;

/// Construction options for a [`MapViewport`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_source: TileSource,
    pub zoom_control: ZoomControl,
    pub scale_control: ScaleControl,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_source: TileSource::default(),
            zoom_control: ZoomControl::default(),
            scale_control: ScaleControl::default(),
        }
    }
}

type DetachHook = dyn FnMut(MapControls);

/// A tile placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Wrapped tile address to fetch.
    pub coord: TileCoord,
    /// Top-left corner relative to the viewport origin.
    pub origin: Point,
}

/// Camera, tile source and control lifetime of one map surface.
///
/// Zoom and scale controls are attached by [`MapViewport::mount`] and
/// released by [`MapViewport::unmount`] or when the viewport is dropped.
/// The viewport also receives the active layer id, which it reports but
/// does not use for rendering.
pub struct MapViewport {
    center: LatLng,
    zoom: u8,
    tile_source: TileSource,
    zoom_control: ZoomControl,
    scale_control: ScaleControl,
    controls: MapControls,
    active_layer: Option<String>,
    on_detach: Option<Box<DetachHook>>,
}

impl MapViewport {
    /// Create the viewport and attach its controls.
    pub fn mount(options: MapOptions) -> Self {
        let zoom = options.tile_source.clamp_zoom(options.zoom);
        let mut viewport = Self {
            center: options.center.normalized(),
            zoom,
            tile_source: options.tile_source,
            zoom_control: options.zoom_control,
            scale_control: options.scale_control,
            controls: MapControls::empty(),
            active_layer: None,
            on_detach: None,
        };

        viewport.controls = MapControls::ZOOM | MapControls::SCALE;
        log::debug!(
            "map viewport mounted at {} zoom {} with {:?}",
            viewport.center,
            viewport.zoom,
            viewport.controls
        );
        viewport
    }

    /// Observe controls released by [`MapViewport::unmount`] or by drop.
    pub fn on_detach(
        mut self,
        on_detach: impl FnMut(MapControls) + 'static,
    ) -> Self {
        self.on_detach = Some(Box::new(on_detach));
        self
    }

    /// Detach every control. Returns what was released.
    pub fn unmount(&mut self) -> MapControls {
        let released = std::mem::take(&mut self.controls);
        if !released.is_empty() {
            log::debug!("map viewport released {released:?}");
            if let Some(on_detach) = self.on_detach.as_mut() {
                on_detach(released);
            }
        }
        released
    }

    pub fn controls(&self) -> MapControls {
        self.controls
    }

    pub fn zoom_control(&self) -> Option<&ZoomControl> {
        self.controls
            .contains(MapControls::ZOOM)
            .then_some(&self.zoom_control)
    }

    pub fn scale_control(&self) -> Option<&ScaleControl> {
        self.controls
            .contains(MapControls::SCALE)
            .then_some(&self.scale_control)
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_source(&self) -> &TileSource {
        &self.tile_source
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.tile_source.max_zoom()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.tile_source.min_zoom()
    }

    /// Set zoom, clamped to the tile source bounds. Returns whether it
    /// changed.
    pub fn set_zoom(&mut self, zoom: u8) -> bool {
        let zoom = self.tile_source.clamp_zoom(zoom);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_add(1))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_sub(1))
    }

    /// Zoom by `delta` steps.
    pub fn zoom_by(&mut self, delta: i8) -> bool {
        let target = i16::from(self.zoom) + i16::from(delta);
        let target = target.clamp(0, i16::from(u8::MAX)) as u8;
        self.set_zoom(target)
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = center.normalized();
    }

    /// Move the map content by a screen-space `delta`, as a drag does.
    pub fn pan_by(&mut self, delta: Vector) {
        let tile_size = self.tile_source.tile_size();
        let (x, y) = geo::project(self.center, self.zoom, tile_size);
        let world = geo::world_size(self.zoom, tile_size);
        let y = (y - f64::from(delta.y)).clamp(0.0, world);
        self.center =
            geo::unproject(x - f64::from(delta.x), y, self.zoom, tile_size);
    }

    /// Geographic position under a point of a viewport of `size`.
    pub fn position_at(&self, point: Point, size: Size) -> LatLng {
        let tile_size = self.tile_source.tile_size();
        let (cx, cy) = geo::project(self.center, self.zoom, tile_size);
        let x = cx + f64::from(point.x - size.width / 2.0);
        let y = cy + f64::from(point.y - size.height / 2.0);
        geo::unproject(x, y, self.zoom, tile_size)
    }

    /// Tiles covering a viewport of `size`, row by row.
    ///
    /// Columns wrap around the antimeridian; rows outside the world are
    /// skipped.
    pub fn visible_tiles(&self, size: Size) -> Vec<VisibleTile> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return Vec::new();
        }

        let tile_size = f64::from(self.tile_source.tile_size());
        let (cx, cy) =
            geo::project(self.center, self.zoom, self.tile_source.tile_size());
        let left = cx - f64::from(size.width) / 2.0;
        let top = cy - f64::from(size.height) / 2.0;
        let right = left + f64::from(size.width);
        let bottom = top + f64::from(size.height);

        let n = i64::from(geo::tiles_per_axis(self.zoom));
        let first_col = (left / tile_size).floor() as i64;
        let last_col = ((right - f64::EPSILON) / tile_size).floor() as i64;
        let first_row = ((top / tile_size).floor() as i64).max(0);
        let last_row =
            (((bottom - f64::EPSILON) / tile_size).floor() as i64).min(n - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let origin = Point::new(
                    (col as f64 * tile_size - left) as f32,
                    (row as f64 * tile_size - top) as f32,
                );
                tiles.push(VisibleTile {
                    coord: TileCoord::new(
                        self.zoom,
                        col.rem_euclid(n) as u32,
                        row as u32,
                    ),
                    origin,
                });
            }
        }
        tiles
    }

    /// Scale bar for the current centre and zoom, if the control is
    /// attached.
    pub fn scale_bar(&self) -> Option<ScaleBar> {
        let control = self.scale_control()?;
        control.measure(geo::meters_per_pixel(
            self.center.lat,
            self.zoom,
            self.tile_source.tile_size(),
        ))
    }

    /// Record the active layer signal.
    pub fn set_active_layer(&mut self, layer_id: impl Into<String>) {
        let layer_id = layer_id.into();
        if self.active_layer.as_deref() != Some(layer_id.as_str()) {
            log::info!("map viewport active layer: {layer_id}");
        }
        self.active_layer = Some(layer_id);
    }

    pub fn active_layer(&self) -> Option<&str> {
        self.active_layer.as_deref()
    }
}

impl fmt::Debug for MapViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapViewport")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("tile_source", &self.tile_source)
            .field("controls", &self.controls)
            .field("active_layer", &self.active_layer)
            .finish_non_exhaustive()
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::mount(MapOptions::default())
    }
}

impl Drop for MapViewport {
    fn drop(&mut self) {
        let _ = self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use iced::{Point, Size, Vector};

    use super::{DEFAULT_CENTER, MapOptions, MapViewport};
    use crate::controls::MapControls;
    use crate::geo::TileCoord;

    #[test]
    fn given_default_options_when_mounted_then_centered_on_india_with_controls()
    {
        let viewport = MapViewport::mount(MapOptions::default());

        assert_eq!(viewport.center(), DEFAULT_CENTER);
        assert_eq!(viewport.zoom(), 5);
        assert_eq!(
            viewport.controls(),
            MapControls::ZOOM | MapControls::SCALE
        );
        assert!(viewport.zoom_control().is_some());
        assert!(viewport.scale_control().is_some());
    }

    #[test]
    fn given_mounted_viewport_when_unmounted_then_controls_are_released_once()
    {
        let mut viewport = MapViewport::default();

        let released = viewport.unmount();
        assert_eq!(released, MapControls::ZOOM | MapControls::SCALE);
        assert!(viewport.controls().is_empty());
        assert!(viewport.zoom_control().is_none());
        assert!(viewport.scale_bar().is_none());

        assert!(viewport.unmount().is_empty());
    }

    #[test]
    fn given_mounted_viewport_when_dropped_then_controls_are_released() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&released);
        let viewport = MapViewport::mount(MapOptions::default())
            .on_detach(move |controls| sink.borrow_mut().push(controls));
        assert!(released.borrow().is_empty());

        drop(viewport);

        assert_eq!(
            released.borrow().as_slice(),
            &[MapControls::ZOOM | MapControls::SCALE]
        );
    }

    #[test]
    fn given_unmounted_viewport_when_dropped_then_nothing_is_released_twice() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&released);
        let mut viewport = MapViewport::default()
            .on_detach(move |controls| sink.borrow_mut().push(controls));

        let _ = viewport.unmount();
        drop(viewport);

        assert_eq!(released.borrow().len(), 1);
    }

    #[test]
    fn given_zoom_requests_when_applied_then_clamped_to_bounds() {
        let mut viewport = MapViewport::default();

        assert!(viewport.set_zoom(30));
        assert_eq!(viewport.zoom(), 18);
        assert!(!viewport.zoom_in());
        assert!(!viewport.can_zoom_in());

        assert!(viewport.set_zoom(0));
        assert_eq!(viewport.zoom(), 3);
        assert!(!viewport.zoom_out());
        assert!(!viewport.can_zoom_out());

        assert!(viewport.zoom_by(4));
        assert_eq!(viewport.zoom(), 7);
        assert!(viewport.zoom_by(-10));
        assert_eq!(viewport.zoom(), 3);
    }

    #[test]
    fn given_initial_zoom_outside_bounds_when_mounted_then_clamped() {
        let viewport = MapViewport::mount(MapOptions {
            zoom: 1,
            ..MapOptions::default()
        });
        assert_eq!(viewport.zoom(), 3);
    }

    #[test]
    fn given_viewport_size_when_tiles_listed_then_cover_whole_area() {
        let viewport = MapViewport::default();
        let size = Size::new(800.0, 600.0);
        let tiles = viewport.visible_tiles(size);

        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|tile| tile.coord.zoom == 5));
        assert!(
            tiles
                .iter()
                .any(|tile| tile.coord == TileCoord::new(5, 23, 14))
        );

        let min_x = tiles.iter().map(|t| t.origin.x).fold(f32::MAX, f32::min);
        let min_y = tiles.iter().map(|t| t.origin.y).fold(f32::MAX, f32::min);
        let max_x = tiles.iter().map(|t| t.origin.x).fold(f32::MIN, f32::max);
        let max_y = tiles.iter().map(|t| t.origin.y).fold(f32::MIN, f32::max);
        assert!(min_x <= 0.0 && min_y <= 0.0);
        assert!(max_x + 256.0 >= size.width && max_y + 256.0 >= size.height);
    }

    #[test]
    fn given_view_across_antimeridian_when_tiles_listed_then_columns_wrap() {
        let mut viewport = MapViewport::default();
        viewport.set_zoom(3);
        viewport.set_center(crate::geo::LatLng::new(0.0, 179.9));

        let tiles = viewport.visible_tiles(Size::new(512.0, 256.0));
        assert!(tiles.iter().any(|tile| tile.coord.x == 0));
        assert!(tiles.iter().any(|tile| tile.coord.x == 7));
        assert!(tiles.iter().all(|tile| tile.coord.x < 8));
    }

    #[test]
    fn given_drag_delta_when_panned_then_center_moves_opposite() {
        let mut viewport = MapViewport::default();
        let before = viewport.center();

        viewport.pan_by(Vector::new(100.0, 0.0));
        assert!(viewport.center().lng < before.lng);

        viewport.pan_by(Vector::new(0.0, 100.0));
        assert!(viewport.center().lat > before.lat);
    }

    #[test]
    fn given_viewport_center_point_when_resolved_then_returns_center() {
        let viewport = MapViewport::default();
        let size = Size::new(400.0, 300.0);
        let position = viewport.position_at(Point::new(200.0, 150.0), size);

        assert!((position.lat - viewport.center().lat).abs() < 1e-6);
        assert!((position.lng - viewport.center().lng).abs() < 1e-6);
    }

    #[test]
    fn given_attached_scale_when_measured_then_reports_round_distance() {
        let viewport = MapViewport::default();
        let bar = viewport.scale_bar().expect("scale control attached");
        assert_eq!(bar.label, "500 km");
    }

    #[test]
    fn given_layer_signal_when_received_then_viewport_reports_it() {
        let mut viewport = MapViewport::default();
        assert!(viewport.active_layer().is_none());

        viewport.set_active_layer("settlements");
        assert_eq!(viewport.active_layer(), Some("settlements"));
        assert_eq!(viewport.zoom(), 5);
    }
}
