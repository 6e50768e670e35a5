//! Core trait for save destinations.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;

use crate::story::{PayloadError, SaveKind, SavePayload};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] PayloadError),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Story JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a sink reports back after a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub kind: SaveKind,
    /// Human readable location (file path or sink-specific name).
    pub location: String,
    pub saved_at: SystemTime,
}

/// Destination for story payloads.
///
/// Sinks validate the payload before storing it.
#[async_trait]
pub trait StorySink: Send + Sync {
    /// Returns the name of this sink for logging.
    fn name(&self) -> &'static str;

    async fn save(&self, payload: SavePayload) -> Result<SaveReceipt, SaveError>;
}
