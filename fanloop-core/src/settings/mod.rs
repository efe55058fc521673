//! Persistence provider for user settings.
//!
//! The feed only persists one flag today, but the store is keyed so other
//! boolean preferences can share it.

mod json_file;
mod memory;

pub use json_file::JsonFileSettings;
pub use memory::MemorySettings;

use crate::error::{Result, SettingsError};

/// Key of the global mute flag.
pub const MUTE_SETTING_KEY: &str = "MuteSetting";

/// Key/value store for boolean settings.
///
/// Implementations must serialize their own writes; callers may share a
/// store between threads.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when the key was never written.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError>;

    fn set_bool(&self, key: &str, value: bool) -> Result<(), SettingsError>;
}
