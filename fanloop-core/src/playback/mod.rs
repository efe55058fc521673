//! Playback bounded context: who plays, who pauses.

mod coordinator;

pub use coordinator::{PlaybackCommand, PlaybackCoordinator};
