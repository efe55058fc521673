//! Fanloop player
//!
//! Headless side of the feed screen. A UI toolkit (or the bundled swipe
//! simulation) feeds scroll offsets into [`feed::FeedController`], which
//! snapshots page frames, asks the core coordinator who should play and
//! forwards the result to a [`feed::PlaybackExecutor`].

pub mod config;
pub mod feed;
pub mod session;

pub use config::FeedConfig;
