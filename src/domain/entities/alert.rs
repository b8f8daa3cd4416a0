use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which measured quantity breached its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Temperature,
    Humidity,
}

/// A transient threshold-breach event.
///
/// Alerts are never persisted; each one triggers exactly one outbound email
/// in the cycle that produced it. There is no de-duplication across cycles:
/// a sustained breach raises a fresh alert every cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub timestamp: DateTime<Utc>,
    pub kind: AlertKind,
    /// The offending reading value (°C or %RH depending on `kind`).
    pub value: f32,
}

impl Alert {
    #[must_use]
    pub fn new(kind: AlertKind, value: f32) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            value,
        }
    }

    /// Email subject line for this breach.
    #[must_use]
    pub const fn subject(&self) -> &'static str {
        match self.kind {
            AlertKind::Temperature => "Temperature Alert",
            AlertKind::Humidity => "Humidity Alert",
        }
    }

    /// Plain-text email body for this breach.
    #[must_use]
    pub fn body(&self) -> String {
        match self.kind {
            AlertKind::Temperature => format!("Temperature out of range: {} C", self.value),
            AlertKind::Humidity => format!("Humidity out of range: {} %", self.value),
        }
    }
}
