//! Feed screen glue: turns scroll positions into frame snapshots and
//! coordinator commands into executor calls.

pub mod controller;
pub mod executor;
pub mod pager;

pub use controller::FeedController;
pub use executor::{LoggingExecutor, PlaybackExecutor};
pub use pager::PagerLayout;
