//! Web Mercator helpers for slippy-map tiles.

use std::f64::consts::PI;
use std::fmt;

use crate::error::MapError;

/// Largest latitude representable in Web Mercator.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
/// Highest zoom level any tile source in this crate can serve.
pub const MAX_TILE_ZOOM: u8 = 22;
/// Equatorial circumference used by OSM scale computations, in metres.
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a position, rejecting values outside the projection.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, MapError> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(MapError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(MapError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Clamp latitude to the projection and wrap longitude to [-180, 180).
    pub fn normalized(self) -> Self {
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let lng = if (-180.0..180.0).contains(&self.lng) {
            self.lng
        } else {
            (self.lng + 180.0).rem_euclid(360.0) - 180.0
        };
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    /// `23.2599°N, 77.4126°E`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lng >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.lat.abs(),
            self.lng.abs()
        )
    }
}

/// Slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub const fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Number of tiles along one axis at `zoom`.
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1u32 << zoom.min(31)
}

/// World size in pixels at `zoom` for square tiles of `tile_size`.
pub fn world_size(zoom: u8, tile_size: u32) -> f64 {
    f64::from(tile_size) * f64::from(tiles_per_axis(zoom))
}

/// Project a position into world pixel space at `zoom`.
pub fn project(position: LatLng, zoom: u8, tile_size: u32) -> (f64, f64) {
    let position = position.normalized();
    let size = world_size(zoom, tile_size);
    let x = (position.lng + 180.0) / 360.0 * size;
    let lat_rad = position.lat.to_radians();
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`]. The result is normalized.
pub fn unproject(x: f64, y: f64, zoom: u8, tile_size: u32) -> LatLng {
    let size = world_size(zoom, tile_size);
    let lng = x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees();
    LatLng::new(lat, lng).normalized()
}

/// Tile containing `position` at `zoom`.
pub fn lat_lng_to_tile(
    position: LatLng,
    zoom: u8,
) -> Result<TileCoord, MapError> {
    if zoom > MAX_TILE_ZOOM {
        return Err(MapError::InvalidZoom(zoom));
    }
    let position = LatLng::checked(position.lat, position.lng)?;
    let n = tiles_per_axis(zoom);
    let (x, y) = project(position, zoom, 1);
    let clamp = |value: f64| (value.floor().max(0.0) as u32).min(n - 1);
    Ok(TileCoord::new(zoom, clamp(x), clamp(y)))
}

/// North-west corner of a tile.
pub fn tile_to_lat_lng(tile: TileCoord) -> LatLng {
    unproject(f64::from(tile.x), f64::from(tile.y), tile.zoom, 1)
}

/// Ground resolution at `latitude` in metres per pixel.
pub fn meters_per_pixel(latitude: f64, zoom: u8, tile_size: u32) -> f64 {
    let latitude = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    EARTH_CIRCUMFERENCE_M * latitude.to_radians().cos()
        / world_size(zoom, tile_size)
}

#[cfg(test)]
mod tests {
    use super::{
        LatLng, TileCoord, lat_lng_to_tile, meters_per_pixel, project,
        tile_to_lat_lng, unproject,
    };
    use crate::error::MapError;

    #[test]
    fn given_new_york_at_zoom_16_when_tiled_then_matches_osm_tile() {
        let tile = lat_lng_to_tile(LatLng::new(40.7128, -74.0060), 16)
            .expect("valid coordinates");
        assert_eq!(tile, TileCoord::new(16, 19295, 24640));
    }

    #[test]
    fn given_india_center_at_zoom_5_when_tiled_then_matches_osm_tile() {
        let tile = lat_lng_to_tile(LatLng::new(20.5937, 78.9629), 5)
            .expect("valid coordinates");
        assert_eq!(tile, TileCoord::new(5, 23, 14));
    }

    #[test]
    fn given_out_of_range_inputs_when_tiled_then_errors() {
        assert!(matches!(
            lat_lng_to_tile(LatLng::new(89.0, 0.0), 3),
            Err(MapError::InvalidLatitude(_))
        ));
        assert!(matches!(
            lat_lng_to_tile(LatLng::new(0.0, 181.0), 3),
            Err(MapError::InvalidLongitude(_))
        ));
        assert!(matches!(
            lat_lng_to_tile(LatLng::new(0.0, 0.0), 30),
            Err(MapError::InvalidZoom(30))
        ));
    }

    #[test]
    fn given_projected_point_when_unprojected_then_position_is_recovered() {
        let bhopal = LatLng::new(23.2599, 77.4126);
        let (x, y) = project(bhopal, 12, 256);
        let back = unproject(x, y, 12, 256);

        assert!((back.lat - bhopal.lat).abs() < 1e-9);
        assert!((back.lng - bhopal.lng).abs() < 1e-9);
    }

    #[test]
    fn given_tile_origin_when_converted_then_returns_north_west_corner() {
        let corner = tile_to_lat_lng(TileCoord::new(1, 1, 1));
        assert!(corner.lat.abs() < 1e-9);
        assert!(corner.lng.abs() < 1e-9);
    }

    #[test]
    fn given_longitude_past_antimeridian_when_normalized_then_wraps() {
        let wrapped = LatLng::new(95.0, 190.0).normalized();
        assert!((wrapped.lng - (-170.0)).abs() < 1e-9);
        assert!(wrapped.lat < 85.06);
    }

    #[test]
    fn given_position_when_displayed_then_uses_hemisphere_suffixes() {
        assert_eq!(
            LatLng::new(23.2599, 77.4126).to_string(),
            "23.2599°N, 77.4126°E"
        );
        assert_eq!(
            LatLng::new(-33.5, -70.25).to_string(),
            "33.5000°S, 70.2500°W"
        );
    }

    #[test]
    fn given_equator_when_resolution_computed_then_halves_per_zoom_level() {
        let z1 = meters_per_pixel(0.0, 1, 256);
        let z2 = meters_per_pixel(0.0, 2, 256);
        assert!((z1 / z2 - 2.0).abs() < 1e-9);
        assert!((z1 - 78_271.517).abs() < 0.01);
    }
}
