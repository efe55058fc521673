use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::trace;

use super::SettingsStore;
use crate::error::{Result, SettingsError};

/// Settings persisted as a flat JSON object on disk.
///
/// Reads and writes share one lock. A write re-reads the file and rewrites
/// it whole, so concurrent setters never lose updates and readers never see
/// a half-written file.
#[derive(Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> Result<Map<String, Value>, SettingsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(SettingsError::Unavailable(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl SettingsStore for JsonFileSettings {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        let _guard = self.file_lock.lock();
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_bool))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), SettingsError> {
        let _guard = self.file_lock.lock();

        let mut map = self.read_map()?;
        map.insert(key.to_string(), Value::Bool(value));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&Value::Object(map))?;
        std::fs::write(&self.path, content)?;

        trace!(key, value, path = %self.path.display(), "setting persisted");
        Ok(())
    }
}
