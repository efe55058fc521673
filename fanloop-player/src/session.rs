//! Scripted swipe session used by the binary to exercise a feed without a
//! touch screen.

use fanloop_core::playback::PlaybackCommand;

use crate::feed::{FeedController, PlaybackExecutor};

/// Summary of one simulated run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Pages that started playing, in order
    pub played: Vec<usize>,
    /// Scroll ticks that produced no command
    pub idle_ticks: usize,
    /// Mute value after the session
    pub muted: bool,
}

impl SessionReport {
    fn record(&mut self, command: &PlaybackCommand<usize>) {
        if command.is_empty() {
            self.idle_ticks += 1;
        }
        if let Some(page) = command.play {
            self.played.push(page);
        }
    }
}

/// Swipes from the first page to the last in `steps_per_page` ticks per
/// page, toggling mute once when `toggle_mute_at` is reached.
pub fn swipe_through<E: PlaybackExecutor + 'static>(
    controller: &mut FeedController<E>,
    steps_per_page: usize,
    toggle_mute_at: Option<usize>,
) -> SessionReport {
    let mut report = SessionReport::default();

    let pages = controller.catalog().count();
    let steps = steps_per_page.max(1);
    let page_height = controller.pager().page_height();

    for page in 1..pages {
        for step in 1..=steps {
            let offset = ((page - 1) as f32 + step as f32 / steps as f32) * page_height;
            let command = controller.on_scroll(offset);
            report.record(&command);
        }
        if toggle_mute_at == Some(page) {
            let muted = controller.toggle_mute();
            log::info!("[Session] mute toggled on page {page}: muted={muted}");
        }
    }

    report.muted = controller.is_muted();
    report
}
