//! Core data model definitions shared across Fanloop crates.
#![allow(missing_docs)]

pub mod frame;
pub mod geometry;
pub mod ids;
pub mod prelude;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use frame::VisibleFrame;
pub use geometry::Rect;
pub use ids::VideoId;
pub use video::{MEDIA_EXTENSION, VideoRecord};
