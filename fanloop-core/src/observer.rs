//! Explicit observer registration.
//!
//! Listeners are registered with [`Observers::subscribe`] and stay attached
//! until the returned [`Subscription`] is dropped or
//! [`Subscription::unsubscribe`]d. Notification is synchronous on the
//! caller's thread.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A list of listeners for values of type `T`.
pub struct Observers<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.len())
            .finish()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.registry.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Observers<T> {
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Arc::new(listener)));
            id
        };

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.lock().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Calls every listener with `value`.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe
    /// or unsubscribe while being notified.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .lock()
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }
}

/// Handle keeping a listener registered.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notifies_until_dropped() {
        let observers = Observers::<u32>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let sub = observers.subscribe(move |v| {
            counter.fetch_add(*v as usize, Ordering::SeqCst);
        });

        observers.notify(&2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        drop(sub);
        observers.notify(&5);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(observers.is_empty());
    }

    #[test]
    fn listener_may_subscribe_during_notify() {
        let observers = Arc::new(Observers::<()>::new());
        let inner: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let reentrant = Arc::clone(&observers);
        let store = Arc::clone(&inner);
        let _outer = observers.subscribe(move |_| {
            store.lock().push(reentrant.subscribe(|_| {}));
        });

        observers.notify(&());
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let observers = Observers::<u8>::new();
        let sub = observers.subscribe(|_| {});
        drop(observers);
        sub.unsubscribe();
    }
}
