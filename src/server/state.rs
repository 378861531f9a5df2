//! Application State
//!
//! `AppState` is the central state container: the database pool, the email
//! transport and the process configuration, all constructed once at startup
//! and cheap to clone per request. The `FromRef` implementations let
//! handlers extract just the part they need.
//!
//! There is no other shared mutable state; every request is an independent
//! workflow over these handles.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::email::Mailer;
use crate::server::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; `None` when `DATABASE_URL` is not set
    pub db_pool: Option<PgPool>,

    /// Email transport; `None` when SMTP is not configured
    pub mailer: Option<Arc<Mailer>>,

    /// Process configuration (verification link base URL)
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Option<Arc<Mailer>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
