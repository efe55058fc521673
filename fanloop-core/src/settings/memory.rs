use std::collections::HashMap;

use parking_lot::RwLock;

use super::SettingsStore;
use crate::error::{Result, SettingsError};

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, bool>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: bool) -> Self {
        let store = Self::new();
        store.values.write().insert(key.into(), value);
        store
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        Ok(self.values.read().get(key).copied())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), SettingsError> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}
