//! Feed focused snapshot of the model surface.
//! Prefer importing from this module in presentation layers.

pub use super::frame::VisibleFrame;
pub use super::geometry::Rect;
pub use super::ids::VideoId;
pub use super::video::VideoRecord;
