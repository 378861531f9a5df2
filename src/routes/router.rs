//! Router Configuration
//!
//! Combines all route groups into a single Axum router:
//!
//! 1. Health probe
//! 2. User routes (signup, signin, verification)
//! 3. Static file serving
//! 4. Fallback handler (404)

use axum::Router;
use tower_http::services::ServeDir;

use crate::routes::health::health;
use crate::routes::user_routes::configure_user_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", axum::routing::get(health));

    // Account endpoints
    let router = configure_user_routes(router);

    // Static assets (stylesheet for the verified page)
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
