use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::alert::Alert;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    BuildFailed(String),
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}

/// Outbound alert channel.
///
/// One notification per breach; failures are logged by the caller and never
/// retried or queued.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    /// Deliver one alert.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the message cannot be composed or the
    /// delivery fails.
    async fn notify(&self, alert: &Alert) -> Result<(), NotificationError>;
}
