//! Feed controller
//!
//! Owns the per-screen state the UI thread mutates: the loaded catalog, the
//! pager, the playback coordinator and the set of live cells. Every entry
//! point returns the command it executed so callers and tests can inspect
//! it.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use fanloop_core::catalog::{CatalogLoad, VideoCatalog};
use fanloop_core::mute::MuteBroadcaster;
use fanloop_core::observer::Subscription;
use fanloop_core::playback::{PlaybackCommand, PlaybackCoordinator};
use fanloop_core::visibility::VisibilityPolicy;
use fanloop_model::{Rect, VideoRecord};
use parking_lot::Mutex;

use super::executor::PlaybackExecutor;
use super::pager::PagerLayout;

type FirstItemReady = Box<dyn FnMut(usize, &VideoRecord) + Send>;

pub struct FeedController<E: PlaybackExecutor + 'static> {
    catalog: VideoCatalog,
    pager: PagerLayout,
    coordinator: PlaybackCoordinator<usize>,
    mute: Arc<MuteBroadcaster>,
    executor: Arc<E>,
    live_cells: Arc<Mutex<BTreeSet<usize>>>,
    first_item_ready: Option<FirstItemReady>,
    _mute_subscription: Subscription,
}

impl<E: PlaybackExecutor + 'static> fmt::Debug for FeedController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedController")
            .field("videos", &self.catalog.count())
            .field("pager", &self.pager)
            .field("playing", &self.coordinator.current())
            .field("live_cells", &*self.live_cells.lock())
            .finish_non_exhaustive()
    }
}

impl<E: PlaybackExecutor + 'static> FeedController<E> {
    pub fn new(
        executor: Arc<E>,
        mute: Arc<MuteBroadcaster>,
        viewport: Rect,
        policy: VisibilityPolicy,
    ) -> Self {
        let live_cells: Arc<Mutex<BTreeSet<usize>>> = Arc::default();

        let subscription = {
            let executor = Arc::clone(&executor);
            let live_cells = Arc::clone(&live_cells);
            mute.subscribe(move |muted| {
                let cells: Vec<usize> = live_cells.lock().iter().copied().collect();
                for page in cells {
                    executor.set_muted(page, muted);
                }
            })
        };

        Self {
            catalog: VideoCatalog::empty(),
            pager: PagerLayout::new(viewport, 0),
            coordinator: PlaybackCoordinator::new(policy),
            mute,
            executor,
            live_cells,
            first_item_ready: None,
            _mute_subscription: subscription,
        }
    }

    /// Hook fired once per catalog load, when the first winner starts.
    pub fn set_on_first_item_ready<F>(&mut self, hook: F)
    where
        F: FnMut(usize, &VideoRecord) + Send + 'static,
    {
        self.first_item_ready = Some(Box::new(hook));
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn pager(&self) -> &PagerLayout {
        &self.pager
    }

    pub fn currently_playing(&self) -> Option<usize> {
        self.coordinator.current().copied()
    }

    pub fn live_cells(&self) -> Vec<usize> {
        self.live_cells.lock().iter().copied().collect()
    }

    pub fn is_muted(&self) -> bool {
        self.mute.current()
    }

    /// Handoff point for a finished background load.
    ///
    /// Stops whatever was playing, swaps the catalog in, rewinds to the
    /// first page and starts the most visible one. A failed load leaves the
    /// feed empty.
    pub fn on_catalog_loaded(&mut self, load: CatalogLoad) -> PlaybackCommand<usize> {
        if let Some(error) = &load.error {
            log::warn!("Video catalog unavailable, showing an empty feed: {error}");
        }

        let reset = self.coordinator.reset();
        self.executor.execute(&reset, &self.catalog);
        // The reset already stopped the old winner.
        let stale = std::mem::take(&mut *self.live_cells.lock());
        for &page in stale.difference(&reset.pause) {
            self.executor.pause(page);
        }

        self.catalog = load.catalog;
        self.pager.set_page_count(self.catalog.count());
        self.pager.set_offset(0.0);
        log::debug!("Feed reloaded with {} videos", self.catalog.count());

        let command = self.refresh();
        if let Some(page) = command.play {
            if let (Some(hook), Some(video)) =
                (self.first_item_ready.as_mut(), self.catalog.at(page))
            {
                hook(page, video);
            }
        }
        command
    }

    /// Scroll tick from the container.
    pub fn on_scroll(&mut self, offset: f32) -> PlaybackCommand<usize> {
        self.pager.set_offset(offset);
        self.refresh()
    }

    /// Layout pass with a new container size.
    pub fn on_viewport_changed(&mut self, viewport: Rect) -> PlaybackCommand<usize> {
        self.pager.set_viewport(viewport);
        self.refresh()
    }

    /// Flips the global mute flag; live cells follow through the
    /// broadcaster subscription.
    pub fn toggle_mute(&self) -> bool {
        self.mute.toggle()
    }

    /// A cell is about to appear. It starts from the current global mute
    /// value rather than whatever it was built with.
    pub fn will_display(&self, page: usize) {
        if self.live_cells.lock().insert(page) {
            self.executor.set_muted(page, self.mute.current());
        }
    }

    pub fn did_end_display(&self, page: usize) {
        if self.live_cells.lock().remove(&page) {
            self.executor.pause(page);
        }
    }

    fn refresh(&mut self) -> PlaybackCommand<usize> {
        let frames = self.pager.visible_frames();

        let rendered: BTreeSet<usize> = frames.iter().map(|f| f.id).collect();
        let gone: Vec<usize> = self
            .live_cells
            .lock()
            .difference(&rendered)
            .copied()
            .collect();
        for page in gone {
            self.did_end_display(page);
        }
        for &page in &rendered {
            self.will_display(page);
        }

        let command = self
            .coordinator
            .on_visibility_changed(&frames, self.pager.viewport());
        if !command.is_empty() {
            log::trace!(
                "Feed command at offset {}: play {:?}, pause {:?}",
                self.pager.offset(),
                command.play,
                command.pause
            );
            self.executor.execute(&command, &self.catalog);
        }
        command
    }
}
