use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::reading::Reading;
use crate::domain::ports::store::{ReadingStore, StoreError};

/// In-memory store for testing purposes.
pub struct InMemoryStore {
    readings: Mutex<Vec<Reading>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            readings: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything inserted so far, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the lock is poisoned.
    pub fn readings(&self) -> Result<Vec<Reading>, StoreError> {
        Ok(self
            .readings
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
            .clone())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingStore for InMemoryStore {
    async fn insert(&self, reading: &Reading) -> Result<(), StoreError> {
        self.readings
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
            .push(*reading);
        Ok(())
    }
}
