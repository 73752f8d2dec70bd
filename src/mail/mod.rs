//! Recording notification mail. Synchronous single attempt; an unconfigured
//! SMTP host turns the sender into a logging no-op.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::error::{AppError, Result};
use crate::models::StoredRecording;

#[async_trait]
pub trait MailSender: Send + Sync {
    /// Mails the host a link to the stored recording.
    async fn send_recording_link(&self, recording: &StoredRecording) -> Result<()>;
}

#[derive(Clone)]
pub struct SmtpMailSender {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
    link_base_url: String,
}

impl SmtpMailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("invalid from address: {e}")))?;

        let transport = if config.host.trim().is_empty() {
            tracing::warn!("SMTP host not configured; mail sender will operate in no-op mode");
            None
        } else {
            let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .timeout(Some(Duration::from_secs(config.timeout_secs)))
                .build();
            Some(Arc::new(transport))
        };

        Ok(Self {
            transport,
            from,
            link_base_url: config.link_base_url.clone(),
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send_recording_link(&self, recording: &StoredRecording) -> Result<()> {
        let link = format!("{}/recordings/{}", self.link_base_url, recording.id);

        let Some(transport) = &self.transport else {
            tracing::info!("mail no-op: recording link for {} is {link}", recording.email);
            return Ok(());
        };

        let to = recording
            .email
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("invalid recipient address: {e}")))?;

        let body = format!(
            "<h2>The session recording is available at:</h2>\
             <h2><a href=\"{link}\">{topic}</a></h2>",
            topic = recording.topic,
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Session recording")
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| AppError::Mail(e.to_string()))?;

        transport
            .send(message)
            .await
            .map_err(|e| classify_send_error(e.is_timeout(), e.to_string()))?;

        Ok(())
    }
}

/// SMTP deadline expiry is a bounded-call timeout, not a delivery failure.
fn classify_send_error(is_timeout: bool, detail: String) -> AppError {
    if is_timeout {
        AppError::Timeout("smtp")
    } else {
        AppError::Mail(detail)
    }
}
