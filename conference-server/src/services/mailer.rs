//! SMTP mail delivery

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use shared::SmtpConfig;
use crate::error::{ServerError, ServerResult};
use crate::traits::Mailer;
use crate::types::OutgoingEmail;

/// Mailer relaying through an SMTP server with STARTTLS
pub struct SmtpMailer {
    /// `None` when no relay is configured; every send then fails
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> ServerResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| ServerError::config(format!("Invalid SMTP relay {}: {e}", config.host)))?
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();

        Ok(Self {
            transport: Some(transport),
        })
    }

    /// Mailer that refuses to send
    pub fn disabled() -> Self {
        Self { transport: None }
    }

    pub fn from_config(config: Option<&SmtpConfig>) -> ServerResult<Self> {
        match config {
            Some(config) => Self::new(config),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Build the MIME message for an outgoing email
    pub fn build_message(email: &OutgoingEmail) -> ServerResult<Message> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e| ServerError::config(format!("Invalid sender address {}: {e}", email.from)))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| ServerError::invalid_request(format!("Invalid recipient {}: {e}", email.to)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| ServerError::mail(format!("Failed to build message: {e}")))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> ServerResult<()> {
        let transport = self.transport.as_ref().ok_or(ServerError::MailNotConfigured)?;
        let message = Self::build_message(&email)?;

        transport
            .send(message)
            .await
            .map_err(|e| ServerError::mail(format!("Failed to send email to {}: {e}", email.to)))?;

        info!("📧 Email sent to {}", email.to);
        Ok(())
    }
}
