//! Catalog bounded context: the ordered list of feed videos.
//!
//! The catalog is decoded once from a static manifest and then read-only.
//! Loading happens off the UI thread through [`CatalogLoader`]; a failed
//! load produces an empty catalog plus the error, never a panic.

mod loader;
mod resolver;
mod source;

pub use loader::{CatalogLoad, CatalogLoader, PendingLoad};
pub use resolver::MediaResolver;
pub use source::{CatalogSource, FileManifest, StaticManifest, parse_manifest};

use std::sync::Arc;

use fanloop_model::{VideoId, VideoRecord};

/// Immutable, cheaply cloneable list of videos in feed order.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Arc<[VideoRecord]>,
}

impl VideoCatalog {
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        Self {
            videos: videos.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Bounds-checked lookup. Negative or out-of-range indices yield `None`.
    pub fn at<N>(&self, index: N) -> Option<&VideoRecord>
    where
        N: TryInto<usize>,
    {
        let index = index.try_into().ok()?;
        self.videos.get(index)
    }

    pub fn get(&self, id: VideoId) -> Option<&VideoRecord> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn position(&self, id: VideoId) -> Option<usize> {
        self.videos.iter().position(|v| v.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoRecord> {
        self.videos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VideoCatalog {
        VideoCatalog::new(vec![
            VideoRecord::new(10, "a.mp4", "A", "first", "h-a"),
            VideoRecord::new(20, "b.mp4", "B", "second", "h-b"),
        ])
    }

    #[test]
    fn indexed_lookup_is_bounds_checked() {
        let catalog = catalog();

        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.at(0).map(|v| v.id), Some(VideoId(10)));
        assert_eq!(catalog.at(1_i64).map(|v| v.id), Some(VideoId(20)));
        assert!(catalog.at(2).is_none());
        assert!(catalog.at(-1_i64).is_none());
        assert!(catalog.at(i64::MIN).is_none());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(VideoId(20)).map(|v| v.title.as_str()), Some("B"));
        assert_eq!(catalog.position(VideoId(20)), Some(1));
        assert!(catalog.get(VideoId(99)).is_none());
    }

    #[test]
    fn empty_catalog_has_nothing_to_display() {
        let catalog = VideoCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.at(0).is_none());
        assert_eq!(catalog.iter().count(), 0);
    }
}
