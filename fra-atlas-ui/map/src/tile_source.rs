use std::path::{Path, PathBuf};

use crate::geo::TileCoord;

pub const OSM_URL_TEMPLATE: &str =
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Raster tile provider description.
///
/// The template understands `{s}` (subdomain), `{z}`, `{x}` and `{y}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    url_template: String,
    subdomains: Vec<String>,
    attribution: String,
    tile_size: u32,
    min_zoom: u8,
    max_zoom: u8,
}

impl Default for TileSource {
    /// Public OpenStreetMap tiles, zoom 3 to 18.
    fn default() -> Self {
        Self {
            url_template: String::from(OSM_URL_TEMPLATE),
            subdomains: vec![
                String::from("a"),
                String::from("b"),
                String::from("c"),
            ],
            attribution: String::from(OSM_ATTRIBUTION),
            tile_size: 256,
            min_zoom: 3,
            max_zoom: 18,
        }
    }
}

impl TileSource {
    pub fn new(
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_subdomains<I, S>(mut self, subdomains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdomains = subdomains.into_iter().map(Into::into).collect();
        self
    }

    /// Set zoom bounds. Bounds are swapped if given in the wrong order.
    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = max_zoom.max(min_zoom);
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size.max(1);
        self
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Clamp `zoom` into the source bounds.
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Tile URL. Subdomains rotate on `x + y` so neighbours spread across
    /// hosts.
    ///
    /// The crate never fetches tiles itself. The URL is what an external
    /// fetcher should store under [`TileSource::cache_path`], and it is
    /// logged when a tile is missing from a [`TileCache`].
    ///
    /// [`TileCache`]: crate::TileCache
    pub fn url(&self, tile: TileCoord) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (u64::from(tile.x) + u64::from(tile.y))
                % self.subdomains.len() as u64;
            self.subdomains[index as usize].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }

    /// Location of a tile inside an on-disk `{z}/{x}/{y}.png` cache.
    pub fn cache_path(&self, cache_root: &Path, tile: TileCoord) -> PathBuf {
        cache_root
            .join(tile.zoom.to_string())
            .join(tile.x.to_string())
            .join(format!("{}.png", tile.y))
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::TileSource;
    use crate::geo::TileCoord;

    #[test]
    fn given_default_source_when_inspected_then_matches_osm_settings() {
        let source = TileSource::default();
        assert_eq!(source.min_zoom(), 3);
        assert_eq!(source.max_zoom(), 18);
        assert_eq!(source.tile_size(), 256);
        assert_eq!(source.attribution(), "© OpenStreetMap contributors");
    }

    #[test]
    fn given_tile_when_url_built_then_template_and_subdomain_are_filled() {
        let source = TileSource::default();
        assert_eq!(
            source.url(TileCoord::new(5, 23, 14)),
            "https://b.tile.openstreetmap.org/5/23/14.png"
        );
        assert_eq!(
            source.url(TileCoord::new(5, 24, 14)),
            "https://c.tile.openstreetmap.org/5/24/14.png"
        );
    }

    #[test]
    fn given_source_without_subdomains_when_url_built_then_placeholder_empty()
    {
        let source = TileSource::new("https://tiles{s}.local/{z}/{x}/{y}", "");
        assert_eq!(
            source.url(TileCoord::new(2, 1, 3)),
            "https://tiles.local/2/1/3"
        );
    }

    #[test]
    fn given_zoom_outside_bounds_when_clamped_then_stays_in_range() {
        let source = TileSource::default().with_zoom_range(10, 4);
        assert_eq!(source.min_zoom(), 4);
        assert_eq!(source.max_zoom(), 10);
        assert_eq!(source.clamp_zoom(1), 4);
        assert_eq!(source.clamp_zoom(12), 10);
        assert_eq!(source.clamp_zoom(7), 7);
    }

    #[test]
    fn given_cache_root_when_path_built_then_uses_zxy_layout() {
        let source = TileSource::default();
        assert_eq!(
            source.cache_path(Path::new("/tiles"), TileCoord::new(5, 23, 14)),
            PathBuf::from("/tiles/5/23/14.png")
        );
    }
}
