use fanloop_core::catalog::{MediaResolver, VideoCatalog};
use fanloop_core::playback::PlaybackCommand;
use fanloop_model::VideoRecord;

/// Media layer boundary. Owns the actual players; the feed only tells it
/// which page to start, stop or mute.
pub trait PlaybackExecutor: Send + Sync {
    fn play(&self, page: usize, video: &VideoRecord);

    fn pause(&self, page: usize);

    fn set_muted(&self, page: usize, muted: bool);

    /// Applies a coordinator command: pauses first, then the play.
    fn execute(&self, command: &PlaybackCommand<usize>, catalog: &VideoCatalog) {
        for &page in &command.pause {
            self.pause(page);
        }
        if let Some(page) = command.play {
            match catalog.at(page) {
                Some(video) => self.play(page, video),
                None => log::warn!("Play requested for page {page} outside the catalog"),
            }
        }
    }
}

/// Executor that only reports what a media engine would do.
#[derive(Debug, Clone)]
pub struct LoggingExecutor {
    resolver: MediaResolver,
}

impl LoggingExecutor {
    pub fn new(resolver: MediaResolver) -> Self {
        Self { resolver }
    }
}

impl PlaybackExecutor for LoggingExecutor {
    fn play(&self, page: usize, video: &VideoRecord) {
        match self.resolver.resolve(video) {
            Some(path) => log::info!(
                "[Feed] play page {page}: \"{}\" ({})",
                video.title,
                path.display()
            ),
            None => log::warn!(
                "[Feed] play page {page}: \"{}\" has no bundled media at {}",
                video.title,
                self.resolver.expected_path(video).display()
            ),
        }
    }

    fn pause(&self, page: usize) {
        log::debug!("[Feed] pause page {page}");
    }

    fn set_muted(&self, page: usize, muted: bool) {
        log::debug!("[Feed] page {page} muted={muted}");
    }
}
