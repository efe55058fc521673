use std::path::PathBuf;

use fanloop_model::VideoRecord;

/// Maps manifest entries to media files bundled next to the manifest.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    media_dir: PathBuf,
}

impl MediaResolver {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
        }
    }

    /// Expected location of the record's media, whether or not it exists.
    pub fn expected_path(&self, video: &VideoRecord) -> PathBuf {
        self.media_dir.join(video.media_file_name())
    }

    /// Location of the record's media, or `None` when it is not bundled.
    pub fn resolve(&self, video: &VideoRecord) -> Option<PathBuf> {
        let path = self.expected_path(video);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_only_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.mp4"), b"").unwrap();
        let resolver = MediaResolver::new(dir.path());

        let present = VideoRecord::new(1, "present.mp4", "", "", "");
        let bare = VideoRecord::new(2, "present", "", "", "");
        let absent = VideoRecord::new(3, "absent.mp4", "", "", "");

        assert_eq!(resolver.resolve(&present), Some(dir.path().join("present.mp4")));
        assert_eq!(resolver.resolve(&bare), Some(dir.path().join("present.mp4")));
        assert!(resolver.resolve(&absent).is_none());
    }
}
