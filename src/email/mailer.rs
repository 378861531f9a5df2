//! SMTP Mailer
//!
//! Sends the verification email over SMTP using lettre's async transport.
//! The transport is constructed once at startup from environment
//! configuration and lives for the process lifetime.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::templates;
use crate::error::AuthError;

/// SMTP configuration read from the environment.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (default: 587 for STARTTLS)
    pub port: u16,
    /// Username for authentication
    pub username: Option<String>,
    /// Password for authentication
    pub password: Option<String>,
    /// "From" address on outbound mail
    pub from_address: String,
}

impl SmtpConfig {
    /// Read the configuration from environment variables.
    ///
    /// Reads `SMTP_HOST` (required), `SMTP_PORT` (default 587),
    /// `SMTP_USERNAME`, `SMTP_PASSWORD` and `SMTP_FROM` (falls back to the
    /// username). Returns `None` when no transport is configured.
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;

        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);

        let username = std::env::var("SMTP_USERNAME").ok();
        let password = std::env::var("SMTP_PASSWORD").ok();
        let from_address = std::env::var("SMTP_FROM").ok().or_else(|| username.clone())?;

        Some(Self {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}

/// The process-wide email transport.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build the SMTP transport from a configuration.
    pub fn new(config: &SmtpConfig) -> Result<Self, AuthError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                tracing::error!("Failed to create SMTP transport: {}", e);
                AuthError::delivery("Email transport could not be configured")
            })?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = config.from_address.parse::<Mailbox>().map_err(|e| {
            tracing::error!("Invalid 'from' address {}: {}", config.from_address, e);
            AuthError::delivery("Email transport could not be configured")
        })?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Probe the SMTP connection. Used once at startup to log readiness;
    /// a failure here never prevents the server from starting.
    pub async fn test_connection(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }

    /// Send a verification email carrying the redemption link.
    pub async fn send_verification(&self, to: &str, link: &str) -> Result<(), AuthError> {
        let to_mailbox = to.parse::<Mailbox>().map_err(|e| {
            tracing::error!("Invalid recipient address {}: {}", to, e);
            AuthError::delivery("Verification email failed")
        })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(templates::VERIFICATION_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(templates::verification_email_body(link))
            .map_err(|e| {
                tracing::error!("Failed to build verification email: {}", e);
                AuthError::delivery("Verification email failed")
            })?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!("Failed to send verification email: {}", e);
            AuthError::delivery("Verification email failed")
        })?;

        Ok(())
    }
}

// AsyncSmtpTransport has no Debug impl, so spell one out.
impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").field("from", &self.from).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn clear_smtp_env() {
        for key in [
            "SMTP_HOST",
            "SMTP_PORT",
            "SMTP_USERNAME",
            "SMTP_PASSWORD",
            "SMTP_FROM",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_config_absent_without_host() {
        clear_smtp_env();
        assert!(SmtpConfig::from_env().is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_defaults() {
        clear_smtp_env();
        std::env::set_var("SMTP_HOST", "smtp.example.com");
        std::env::set_var("SMTP_USERNAME", "noreply@example.com");
        std::env::set_var("SMTP_PASSWORD", "app-password");

        let config = SmtpConfig::from_env().unwrap();
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert_eq!(config.from_address, "noreply@example.com");

        clear_smtp_env();
    }

    #[test]
    #[serial]
    fn test_config_requires_a_from_address() {
        clear_smtp_env();
        std::env::set_var("SMTP_HOST", "smtp.example.com");

        // No SMTP_FROM and no username to fall back to.
        assert!(SmtpConfig::from_env().is_none());

        clear_smtp_env();
    }

    #[test]
    fn test_mailer_rejects_invalid_from_address() {
        let config = SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: None,
            password: None,
            from_address: "not an address".to_string(),
        };

        assert!(matches!(
            Mailer::new(&config).unwrap_err(),
            AuthError::Delivery { .. }
        ));
    }

    #[tokio::test]
    async fn test_mailer_builds_from_valid_config() {
        let config = SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: Some("noreply@example.com".to_string()),
            password: Some("app-password".to_string()),
            from_address: "Verimail <noreply@example.com>".to_string(),
        };

        assert!(Mailer::new(&config).is_ok());
    }
}
