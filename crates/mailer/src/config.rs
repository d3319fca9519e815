//! Mail transport configuration.

/// Default SMTP relay host.
const DEFAULT_MAIL_SERVER: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_MAIL_PORT: u16 = 587;

/// SMTP settings, resolved once at process start and immutable afterward.
///
/// The configured username doubles as sender and recipient: the system
/// emails itself on behalf of the visitor, with the visitor's address set
/// as reply-to.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub server: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// Whether to negotiate STARTTLS.
    pub use_tls: bool,
    /// SMTP username; also the sender and recipient address.
    pub username: String,
    /// SMTP password.
    pub password: String,
    /// When true, submissions are printed to the log instead of sent.
    pub testing: bool,
}

impl MailConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default          |
    /// |-----------------|------------------|
    /// | `MAIL_SERVER`   | `smtp.gmail.com` |
    /// | `MAIL_PORT`     | `587`            |
    /// | `MAIL_USE_TLS`  | `true`           |
    /// | `MAIL_USERNAME` | empty            |
    /// | `MAIL_PASSWORD` | empty            |
    /// | `TESTING`       | `false`          |
    pub fn from_env() -> Self {
        Self {
            server: std::env::var("MAIL_SERVER").unwrap_or_else(|_| DEFAULT_MAIL_SERVER.into()),
            port: std::env::var("MAIL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_MAIL_PORT),
            use_tls: env_flag("MAIL_USE_TLS", true),
            username: std::env::var("MAIL_USERNAME").unwrap_or_default(),
            password: std::env::var("MAIL_PASSWORD").unwrap_or_default(),
            testing: env_flag("TESTING", false),
        }
    }

    /// A config suitable for tests: console mode, no credentials.
    pub fn testing() -> Self {
        Self {
            server: DEFAULT_MAIL_SERVER.into(),
            port: DEFAULT_MAIL_PORT,
            use_tls: true,
            username: String::new(),
            password: String::new(),
            testing: true,
        }
    }
}

/// Parse a boolean environment flag. Unset falls back to `default`; a set
/// value is true only when it equals `true` (case-insensitive), matching
/// the usual `.env` convention.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => value.eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testing_config_is_console_mode() {
        let config = MailConfig::testing();
        assert!(config.testing);
        assert!(config.username.is_empty());
        assert_eq!(config.port, 587);
    }
}
