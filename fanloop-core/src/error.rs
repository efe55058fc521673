use std::sync::Arc;

use thiserror::Error;

/// Failures while reading or decoding the video manifest.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog load task failed: {0}")]
    TaskFailed(String),
}

/// Failures of the settings persistence provider.
///
/// None of these are fatal: callers keep their in-memory state and surface
/// the error as a warning.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Settings store unavailable: {0}")]
    Unavailable(String),
}

/// Shared form of a catalog error, cloned out to every waiting caller.
pub type SharedCatalogError = Arc<CatalogError>;

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
