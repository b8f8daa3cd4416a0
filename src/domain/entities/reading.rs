use serde::{Deserialize, Serialize};

/// One temperature/humidity sample from the sensor.
///
/// Readings are ephemeral: a cycle produces one, persists it, evaluates it
/// against the thresholds, and drops it. The row timestamp is assigned
/// server-side at insert, so none is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Relative humidity, percent.
    pub humidity: f32,
}

impl Reading {
    #[must_use]
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}
