//! Global mute flag shared by every feed cell.
//!
//! One broadcaster is built per process and handed to whoever needs it.
//! A toggle updates memory first, then persists, then pushes the new value
//! to all subscribers on the calling thread. A failing store never blocks
//! the toggle; it is reported to persist-failure subscribers instead.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::ReentrantMutex;
use tracing::{debug, warn};

use crate::error::SettingsError;
use crate::observer::{Observers, Subscription};
use crate::settings::{MUTE_SETTING_KEY, SettingsStore};

pub struct MuteBroadcaster {
    muted: AtomicBool,
    store: Arc<dyn SettingsStore>,
    // Serializes set/persist/notify. Reentrant so a listener may call back
    // into set/toggle; the nested change is applied before the outer
    // notification finishes.
    write_lock: ReentrantMutex<()>,
    listeners: Observers<bool>,
    persist_failures: Observers<Arc<SettingsError>>,
}

impl fmt::Debug for MuteBroadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MuteBroadcaster")
            .field("muted", &self.current())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl MuteBroadcaster {
    /// Unmuted unless the store says otherwise.
    pub const DEFAULT_MUTED: bool = false;

    /// Reads the persisted flag once.
    ///
    /// A missing key or an unreadable store falls back to
    /// [`Self::DEFAULT_MUTED`].
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        let muted = match store.get_bool(MUTE_SETTING_KEY) {
            Ok(value) => value.unwrap_or(Self::DEFAULT_MUTED),
            Err(e) => {
                warn!(error = %e, "failed to read persisted mute setting; using default");
                Self::DEFAULT_MUTED
            }
        };

        Self {
            muted: AtomicBool::new(muted),
            store,
            write_lock: ReentrantMutex::new(()),
            listeners: Observers::new(),
            persist_failures: Observers::new(),
        }
    }

    /// Value every newly displayed cell should start with.
    pub fn current(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        let _guard = self.write_lock.lock();
        let next = !self.current();
        self.apply(next);
        next
    }

    /// Sets the flag explicitly. Listeners are only notified on change.
    pub fn set(&self, muted: bool) {
        let _guard = self.write_lock.lock();
        if self.current() == muted {
            return;
        }
        self.apply(muted);
    }

    fn apply(&self, muted: bool) {
        self.muted.store(muted, Ordering::Release);

        if let Err(e) = self.store.set_bool(MUTE_SETTING_KEY, muted) {
            warn!(error = %e, muted, "failed to persist mute setting");
            self.persist_failures.notify(&Arc::new(e));
        }

        debug!(muted, listeners = self.listeners.len(), "broadcasting mute change");
        self.listeners.notify(&muted);
    }

    /// Registers `listener` for every subsequent change.
    ///
    /// Listeners run on the calling thread. One that calls [`Self::set`] or
    /// [`Self::toggle`] triggers a nested broadcast with the newer value.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.listeners.subscribe(move |muted: &bool| listener(*muted))
    }

    /// Registers `listener` for persistence failures.
    pub fn subscribe_persist_failures<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<SettingsError>) + Send + Sync + 'static,
    {
        self.persist_failures.subscribe(listener)
    }
}
