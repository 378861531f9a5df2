//! HTTP route configuration.

pub mod health;
pub mod router;
pub mod user_routes;

pub use router::create_router;
