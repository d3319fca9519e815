//! Contact email dispatch via SMTP or the console fallback.
//!
//! [`Mailer`] wraps the two delivery variants behind one `dispatch` call.
//! Startup picks the variant from [`MailConfig`]; request handlers never
//! see transport errors, only the success/failure bool.

use portfolio_core::Contact;

use crate::config::MailConfig;

/// Subject prefix for outgoing contact emails.
const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email dispatch failures. Internal only: `dispatch`
/// logs these and reports a plain bool to the caller.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The sender, recipient, or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The transport is not usable as configured.
    #[error("Mail configuration error: {0}")]
    Config(&'static str),
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// The email dispatch capability.
///
/// `Console` logs submissions and never fails; `Smtp` sends them through
/// a real relay. Selected once at startup by [`Mailer::from_config`].
#[derive(Debug)]
pub enum Mailer {
    Console,
    Smtp(SmtpMailer),
}

/// SMTP delivery backed by `lettre`'s async transport.
#[derive(Debug)]
pub struct SmtpMailer {
    config: MailConfig,
}

impl Mailer {
    /// Select the dispatch variant for the given configuration.
    ///
    /// Testing mode always gets the console sink; everything else gets the
    /// SMTP transport (a missing username is reported at dispatch time, not
    /// here, so startup never fails on mail misconfiguration).
    pub fn from_config(config: &MailConfig) -> Self {
        if config.testing {
            Mailer::Console
        } else {
            Mailer::Smtp(SmtpMailer {
                config: config.clone(),
            })
        }
    }

    /// Dispatch a validated submission.
    ///
    /// Returns `true` on success. All transport and configuration failures
    /// are logged here and collapsed to `false`; nothing propagates.
    pub async fn dispatch(&self, contact: &Contact) -> bool {
        match self {
            Mailer::Console => {
                tracing::info!("\n{}", console_block(contact));
                true
            }
            Mailer::Smtp(smtp) => match smtp.send(contact).await {
                Ok(()) => {
                    tracing::info!(reply_to = %contact.email, "Contact email sent");
                    true
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to send contact email");
                    false
                }
            },
        }
    }
}

impl SmtpMailer {
    /// Build and send the contact email through the configured relay.
    async fn send(&self, contact: &Contact) -> Result<(), MailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        // The system emails itself; a relay account is mandatory.
        if self.config.username.is_empty() {
            return Err(MailError::Config("MAIL_USERNAME is not set"));
        }

        let email = Message::builder()
            .from(self.config.username.parse()?)
            .to(self.config.username.parse()?)
            .reply_to(contact.email.parse()?)
            .subject(format!("{SUBJECT_PREFIX}{}", contact.subject))
            .header(ContentType::TEXT_PLAIN)
            .body(body_text(contact))
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut builder = if self.config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.server)
        };
        builder = builder.port(self.config.port);

        if !self.config.password.is_empty() {
            builder = builder.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }

        let transport = builder.build();
        transport.send(email).await?;
        Ok(())
    }
}

/// The block logged by the console sink in place of a real send.
fn console_block(contact: &Contact) -> String {
    format!(
        "=== CONTACT FORM SUBMISSION (TEST MODE) ===\n\
         \x20 From   : {} <{}>\n\
         \x20 Subject: {}\n\
         \x20 Message: {}\n\
         ===========================================",
        contact.name, contact.email, contact.subject, contact.message,
    )
}

/// Plain-text body listing the submission fields.
fn body_text(contact: &Contact) -> String {
    format!(
        "Name:    {}\nEmail:   {}\nSubject: {}\n\nMessage:\n{}",
        contact.name, contact.email, contact.subject, contact.message,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
