use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use tracing::{info, warn};

use super::VideoCatalog;
use super::source::{CatalogSource, parse_manifest};
use crate::error::{CatalogError, SharedCatalogError};

/// Result of one load attempt.
///
/// On failure `catalog` is empty and `error` says why; consumers display
/// nothing rather than re-raising.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: VideoCatalog,
    pub error: Option<SharedCatalogError>,
}

impl CatalogLoad {
    pub fn loaded(catalog: VideoCatalog) -> Self {
        Self {
            catalog,
            error: None,
        }
    }

    pub fn failed(error: CatalogError) -> Self {
        Self {
            catalog: VideoCatalog::empty(),
            error: Some(Arc::new(error)),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Future shared by every caller waiting on the same load.
pub type PendingLoad = Shared<BoxFuture<'static, CatalogLoad>>;

/// Loads the catalog on a background task, one attempt at a time.
///
/// Calls made while a load is running join it instead of starting another
/// read. Once it completes, the next call starts a fresh attempt. Must be
/// called from within a tokio runtime.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    in_flight: Mutex<Option<PendingLoad>>,
}

impl fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source)
            .field("loading", &self.is_loading())
            .finish()
    }
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            in_flight: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
            .lock()
            .as_ref()
            .is_some_and(|pending| pending.peek().is_none())
    }

    pub fn load(&self) -> PendingLoad {
        let mut slot = self.in_flight.lock();
        if let Some(pending) = slot.as_ref() {
            if pending.peek().is_none() {
                return pending.clone();
            }
        }

        let source = Arc::clone(&self.source);
        let task = tokio::spawn(async move {
            let bytes = source.read_manifest().await?;
            parse_manifest(&bytes)
        });

        let pending = async move {
            let outcome = match task.await {
                Ok(result) => result,
                Err(join_error) => Err(CatalogError::TaskFailed(join_error.to_string())),
            };

            match outcome {
                Ok(records) => {
                    info!(videos = records.len(), "video catalog loaded");
                    CatalogLoad::loaded(VideoCatalog::new(records))
                }
                Err(e) => {
                    warn!(error = %e, "failed to load video catalog");
                    CatalogLoad::failed(e)
                }
            }
        }
        .boxed()
        .shared();

        *slot = Some(pending.clone());
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FileManifest, StaticManifest};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const MANIFEST: &[u8] = br#"[
        {"id": 1, "filename": "a.mp4", "title": "A", "description": "", "hashId": "x"},
        {"id": 2, "filename": "b.mp4", "title": "B", "description": "", "hashId": "y"}
    ]"#;

    #[derive(Debug)]
    struct GatedSource {
        reads: AtomicUsize,
        gate: Notify,
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn read_manifest(&self) -> Result<Vec<u8>, CatalogError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(MANIFEST.to_vec())
        }
    }

    #[tokio::test]
    async fn loads_static_manifest() {
        let loader = CatalogLoader::new(Arc::new(StaticManifest::new(MANIFEST)));
        let load = loader.load().await;

        assert!(load.is_ok());
        assert_eq!(load.catalog.count(), 2);
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn missing_manifest_yields_empty_catalog_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogLoader::new(Arc::new(FileManifest::new(dir.path().join("nope.json"))));
        let load = loader.load().await;

        assert!(load.catalog.is_empty());
        assert!(matches!(load.error.as_deref(), Some(CatalogError::Io(_))));
    }

    #[tokio::test]
    async fn malformed_manifest_yields_empty_catalog_and_error() {
        let loader = CatalogLoader::new(Arc::new(StaticManifest::new(b"{\"id\": 1}")));
        let load = loader.load().await;

        assert!(load.catalog.is_empty());
        assert!(matches!(load.error.as_deref(), Some(CatalogError::Malformed(_))));
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_read() {
        let source = Arc::new(GatedSource {
            reads: AtomicUsize::new(0),
            gate: Notify::new(),
        });
        let loader = CatalogLoader::new(source.clone());

        let first = loader.load();
        let second = loader.load();
        assert!(loader.is_loading());

        source.gate.notify_one();
        let (a, b) = tokio::join!(first, second);

        assert_eq!(a.catalog.count(), 2);
        assert_eq!(b.catalog.count(), 2);
        assert_eq!(source.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn completed_load_allows_a_fresh_attempt() {
        let source = Arc::new(GatedSource {
            reads: AtomicUsize::new(0),
            gate: Notify::new(),
        });
        let loader = CatalogLoader::new(source.clone());

        source.gate.notify_one();
        loader.load().await;
        source.gate.notify_one();
        loader.load().await;

        assert_eq!(source.reads.load(Ordering::SeqCst), 2);
    }
}
