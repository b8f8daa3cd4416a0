use serde::{Deserialize, Serialize};

use crate::domain::entities::alert::{Alert, AlertKind};
use crate::domain::entities::reading::Reading;

/// Alert bounds for temperature and humidity readings.
///
/// A breach is a reading strictly greater than the high bound or strictly
/// less than the low bound; equality never fires. Nothing stops a low bound
/// from sitting above its high bound: the configuration layer accepts such
/// values uncomplainingly, and every reading then breaches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Temperature above this fires an alert (°C)
    pub temperature_high: f32,
    /// Temperature below this fires an alert (°C)
    pub temperature_low: f32,
    /// Humidity above this fires an alert (%RH)
    pub humidity_high: f32,
    /// Humidity below this fires an alert (%RH)
    pub humidity_low: f32,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            temperature_high: 27.0,
            temperature_low: 18.0,
            humidity_high: 80.0,
            humidity_low: 20.0,
        }
    }
}

impl ThresholdSet {
    /// Evaluate a reading against the bounds. Pure: reading in, alerts out,
    /// no I/O.
    ///
    /// Temperature and humidity are independent checks, so one reading
    /// yields zero, one, or two alerts, temperature first.
    #[must_use]
    pub fn evaluate(&self, reading: &Reading) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if reading.temperature > self.temperature_high || reading.temperature < self.temperature_low
        {
            alerts.push(Alert::new(AlertKind::Temperature, reading.temperature));
        }

        if reading.humidity > self.humidity_high || reading.humidity < self.humidity_low {
            alerts.push(Alert::new(AlertKind::Humidity, reading.humidity));
        }

        alerts
    }
}
