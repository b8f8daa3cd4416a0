use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::reading::Reading;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    ConnectFailed(String),
    #[error("database write failed: {0}")]
    WriteFailed(String),
}

/// Persistence sink for sensor readings.
///
/// Failures are recoverable: the sampling loop logs them and carries on with
/// the same cycle's alert evaluation. There is no retry and no transaction
/// spanning multiple readings.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Insert one reading, timestamped server-side.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be established or the
    /// insert fails.
    async fn insert(&self, reading: &Reading) -> Result<(), StoreError>;
}
