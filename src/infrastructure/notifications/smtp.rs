use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{AlertNotifier, NotificationError};

/// Sends one plain-text email per alert over SMTP submission.
///
/// Each delivery opens its own session: connect to the configured host and
/// port, upgrade with STARTTLS, authenticate, send, drop the transport.
/// Nothing is pooled or retried; a sustained breach simply does this again
/// next cycle.
pub struct SmtpNotifier {
    host: String,
    port: u16,
    username: String,
    password: String,
    recipient: String,
}

impl SmtpNotifier {
    #[must_use]
    pub fn new(host: &str, port: u16, username: &str, password: &str, recipient: &str) -> Self {
        Self {
            host: host.to_string(),
            port,
            username: username.to_string(),
            password: password.to_string(),
            recipient: recipient.to_string(),
        }
    }

    /// Compose the message for an alert: From/To/Subject/Date plus a
    /// plain-text body.
    fn compose(&self, alert: &Alert) -> Result<Message, NotificationError> {
        let from: Mailbox = self
            .username
            .parse()
            .map_err(|e| NotificationError::InvalidAddress(format!("{}: {e}", self.username)))?;
        let to: Mailbox = self
            .recipient
            .parse()
            .map_err(|e| NotificationError::InvalidAddress(format!("{}: {e}", self.recipient)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(alert.subject())
            .date_now()
            .header(ContentType::TEXT_PLAIN)
            .body(alert.body())
            .map_err(|e| NotificationError::BuildFailed(e.to_string()))
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotificationError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        Ok(builder
            .port(self.port)
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build())
    }
}

#[async_trait]
impl AlertNotifier for SmtpNotifier {
    async fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        let email = self.compose(alert)?;
        let mailer = self.transport()?;
        mailer
            .send(email)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        tracing::info!(subject = alert.subject(), "Alert email sent");
        Ok(())
    }
}
