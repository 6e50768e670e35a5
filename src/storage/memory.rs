use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use super::sink::{SaveError, SaveReceipt, StorySink};
use crate::story::SavePayload;

/// Keeps saved payloads in memory, optionally after an artificial delay.
///
/// Used by tests and for trying the editor without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Arc<Mutex<Vec<SavePayload>>>,
    delay: Duration,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            saved: Arc::default(),
            delay,
        }
    }

    /// Payloads saved so far, oldest first.
    pub fn saved(&self) -> Vec<SavePayload> {
        self.saved.lock().clone()
    }
}

#[async_trait]
impl StorySink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn save(&self, payload: SavePayload) -> Result<SaveReceipt, SaveError> {
        payload.validate()?;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let kind = payload.kind;
        let index = {
            let mut saved = self.saved.lock();
            saved.push(payload);
            saved.len()
        };
        Ok(SaveReceipt {
            kind,
            location: format!("memory://{index}"),
            saved_at: SystemTime::now(),
        })
    }
}
