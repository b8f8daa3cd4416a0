use thiserror::Error;

use crate::domain::entities::reading::Reading;

#[derive(Error, Debug)]
pub enum SensorError {
    #[error("i2c bus error: {0}")]
    Bus(String),
    #[error("sensor returned corrupt data: {0}")]
    CorruptData(String),
}

/// Blocking access to the temperature/humidity sensor.
///
/// A failed read is fatal to the cycle that issued it; there is no retry.
/// In continuous mode the loop halts and the init system's restart policy
/// takes over.
pub trait SensorReader: Send + Sync {
    /// Take one temperature/humidity sample.
    ///
    /// # Errors
    ///
    /// Returns `SensorError` if the bus transaction fails or the response
    /// fails checksum validation.
    fn read(&self) -> Result<Reading, SensorError>;
}
