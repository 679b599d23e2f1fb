use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image;

use crate::geo::TileCoord;
use crate::tile_source::TileSource;

/// On-disk `{z}/{x}/{y}.png` tile cache for one [`TileSource`].
///
/// Every tile is looked up on disk once. Hits keep their image handle, so
/// redraws reuse the decoded image. Misses are remembered too, until
/// [`TileCache::retain_zoom`] forgets them.
#[derive(Debug)]
pub struct TileCache {
    root: PathBuf,
    resolved: RefCell<HashMap<TileCoord, Option<image::Handle>>>,
}

impl TileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resolved: RefCell::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Image for `tile`, or `None` when the cache does not hold it.
    pub fn get(
        &self,
        source: &TileSource,
        tile: TileCoord,
    ) -> Option<image::Handle> {
        self.resolved
            .borrow_mut()
            .entry(tile)
            .or_insert_with(|| self.probe(source, tile))
            .clone()
    }

    /// Forget lookups made at any other zoom level.
    pub fn retain_zoom(&mut self, zoom: u8) {
        self.resolved.get_mut().retain(|tile, _| tile.zoom == zoom);
    }

    /// Number of tiles looked up so far.
    pub fn len(&self) -> usize {
        self.resolved.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn probe(
        &self,
        source: &TileSource,
        tile: TileCoord,
    ) -> Option<image::Handle> {
        let path = source.cache_path(&self.root, tile);
        if path.is_file() {
            Some(image::Handle::from_path(path))
        } else {
            log::debug!("tile {tile} not cached, source {}", source.url(tile));
            None
        }
    }
}
