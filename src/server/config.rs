//! Server Configuration
//!
//! Configuration is loaded from environment variables with sensible
//! defaults for local development. Services that fail to initialize are
//! set to `None` and the server starts without them: handlers answer with
//! a service-unavailable or delivery failure instead of the process
//! refusing to boot.

use std::sync::Arc;

use sqlx::PgPool;

use crate::email::{Mailer, SmtpConfig};

/// Process-wide configuration constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public base URL used in verification links
    pub app_url: String,
}

impl AppConfig {
    /// Read the configuration from the environment.
    ///
    /// `APP_URL` defaults to the local development address.
    pub fn from_env() -> Self {
        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self { app_url }
    }
}

/// Load and initialize the database connection pool.
///
/// Reads `DATABASE_URL`, connects, and runs migrations. Returns `None` when
/// the variable is unset or the connection fails; errors are logged but do
/// not prevent startup.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Build the SMTP mailer from environment configuration.
///
/// Returns `None` when no transport is configured or construction fails;
/// signups then complete with a delivery failure while the rest of the
/// server keeps working.
pub fn load_mailer() -> Option<Arc<Mailer>> {
    let Some(config) = SmtpConfig::from_env() else {
        tracing::warn!("SMTP not configured. Verification emails will not be sent.");
        return None;
    };

    match Mailer::new(&config) {
        Ok(mailer) => {
            tracing::info!("SMTP transport configured for {}", config.host);
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::error!("Failed to configure SMTP transport: {}", e);
            None
        }
    }
}
