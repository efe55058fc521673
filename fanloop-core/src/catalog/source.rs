use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use fanloop_model::VideoRecord;

use crate::error::Result;

/// Where the manifest bytes come from.
#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    async fn read_manifest(&self) -> Result<Vec<u8>>;
}

/// Decodes a whole manifest. Any malformed entry rejects the lot.
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<VideoRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Manifest read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileManifest {
    path: PathBuf,
}

impl FileManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileManifest {
    async fn read_manifest(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// Manifest compiled into the binary.
#[derive(Clone)]
pub struct StaticManifest {
    bytes: &'static [u8],
}

impl fmt::Debug for StaticManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticManifest")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl StaticManifest {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }
}

#[async_trait]
impl CatalogSource for StaticManifest {
    async fn read_manifest(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn parses_full_manifest() {
        let json = br#"[
            {"id": 1, "filename": "a.mp4", "title": "A", "description": "", "hashId": "x"},
            {"id": 2, "filename": "b", "title": "B", "description": "d", "hashId": "y"}
        ]"#;
        let records = parse_manifest(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].media_file_name(), "b.mp4");
    }

    #[test]
    fn one_bad_entry_rejects_everything() {
        let json = br#"[
            {"id": 1, "filename": "a.mp4", "title": "A", "description": "", "hashId": "x"},
            {"id": "two", "filename": "b.mp4", "title": "B", "description": "", "hashId": "y"}
        ]"#;
        assert!(matches!(parse_manifest(json), Err(CatalogError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileManifest::new(dir.path().join("video_data.json"));
        assert!(matches!(
            source.read_manifest().await,
            Err(CatalogError::Io(_))
        ));
    }
}
