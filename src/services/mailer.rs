use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::common::MailError;
use crate::config::SmtpSettings;
use crate::models::ContactMessage;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<(), MailError>;
}

/// Relays contact messages through an SMTP server using STARTTLS.
pub struct SmtpMailer {
    settings: SmtpSettings,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.username.is_some() && self.settings.password.is_some()
    }

    pub fn build_message(
        &self,
        message: &ContactMessage,
    ) -> Result<Message, MailError> {
        let sender = self
            .settings
            .username
            .as_deref()
            .ok_or(MailError::NotConfigured)?;
        // Without an agent inbox the sender receives its own notifications.
        let recipient =
            self.settings.recipient.as_deref().unwrap_or(sender);

        let email = Message::builder()
            .from(sender.parse::<Mailbox>()?)
            .reply_to(message.email.parse::<Mailbox>()?)
            .to(recipient.parse::<Mailbox>()?)
            .subject(message.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body())?;

        Ok(email)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> Result<(), MailError> {
        let (Some(username), Some(password)) =
            (&self.settings.username, &self.settings.password)
        else {
            return Err(MailError::NotConfigured);
        };

        let email = self.build_message(message)?;

        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(
                &self.settings.host,
            )?
            .port(self.settings.port)
            .credentials(Credentials::new(
                username.clone(),
                password.clone(),
            ))
            .build();

        transport.send(email).await?;

        log::info!("Contact message from {} relayed", message.email);

        Ok(())
    }
}
