//! # Fanloop Core
//!
//! The testable heart of the Fanloop vertical video feed. Everything here
//! works on opaque cell identifiers and rectangles; nothing touches views or
//! media objects.
//!
//! - [`visibility`]: picks the single most visible cell of a snapshot
//! - [`playback`]: turns successive winners into play/pause commands
//! - [`mute`]: the persisted global mute flag and its broadcast
//! - [`settings`]: persistence provider used by the mute flag
//! - [`catalog`]: the ordered video list and its background loader
//! - [`observer`]: subscription handles shared by the broadcasters
//!
//! ```
//! use fanloop_core::playback::PlaybackCoordinator;
//! use fanloop_core::visibility::VisibilityPolicy;
//! use fanloop_model::{Rect, VisibleFrame};
//!
//! let viewport = Rect::new(0.0, 0.0, 320.0, 568.0);
//! let frames = [
//!     VisibleFrame::new(0usize, Rect::new(0.0, 0.0, 320.0, 200.0)),
//!     VisibleFrame::new(1, Rect::new(0.0, 200.0, 320.0, 400.0)),
//! ];
//!
//! let mut coordinator = PlaybackCoordinator::new(VisibilityPolicy::default());
//! let command = coordinator.on_visibility_changed(&frames, viewport);
//! assert_eq!(command.play, Some(1));
//! assert!(coordinator.on_visibility_changed(&frames, viewport).is_empty());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod mute;
pub mod observer;
pub mod playback;
pub mod settings;
pub mod visibility;

pub use catalog::{CatalogLoad, CatalogLoader, MediaResolver, VideoCatalog};
pub use error::{CatalogError, SettingsError};
pub use mute::MuteBroadcaster;
pub use observer::Subscription;
pub use playback::{PlaybackCommand, PlaybackCoordinator};
pub use visibility::{VisibilityPolicy, VisibilitySelector, select_most_visible};
