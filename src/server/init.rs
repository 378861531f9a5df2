//! Server Initialization
//!
//! Assembles the Axum application: loads the optional services (database,
//! SMTP transport), probes the email transport once, and configures the
//! router.

use std::sync::Arc;

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{load_database, load_mailer, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// Startup is resilient: a missing database or SMTP configuration is
/// logged and the server runs degraded rather than refusing to boot.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing verimail backend server");

    let db_pool = load_database().await;
    let mailer = load_mailer();

    // Probe the transport once at startup so a misconfiguration shows up in
    // the log immediately instead of on the first signup.
    if let Some(mailer) = &mailer {
        if mailer.test_connection().await {
            tracing::info!("SMTP transport ready for messages");
        } else {
            tracing::warn!("SMTP transport verification failed; delivery may not work");
        }
    }

    let config = Arc::new(AppConfig::from_env());

    let app_state = AppState {
        db_pool,
        mailer,
        config,
    };

    tracing::info!("Router configured");

    create_router(app_state)
}
