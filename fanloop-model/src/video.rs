use crate::ids::VideoId;

/// Extension every bundled media file carries.
pub const MEDIA_EXTENSION: &str = "mp4";

/// A single entry of the video manifest.
///
/// Records are decoded once when the catalog loads and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VideoRecord {
    pub id: VideoId,
    pub filename: String,
    pub title: String,
    pub description: String,
    /// Content hash published alongside the file.
    pub hash_id: String,
}

impl VideoRecord {
    pub fn new(
        id: impl Into<VideoId>,
        filename: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        hash_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            title: title.into(),
            description: description.into(),
            hash_id: hash_id.into(),
        }
    }

    /// Filename without its media extension.
    ///
    /// Manifests are inconsistent about including `.mp4`, so the
    /// extension is stripped wherever it occurs.
    pub fn resource_stem(&self) -> String {
        self.filename.replace(".mp4", "")
    }

    /// Filename as it is expected on disk (`<stem>.mp4`).
    pub fn media_file_name(&self) -> String {
        format!("{}.{MEDIA_EXTENSION}", self.resource_stem())
    }
}
