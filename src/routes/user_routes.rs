//! User Route Handlers
//!
//! Routes:
//! - `POST /user/signup` - registration
//! - `POST /user/signin` - authentication
//! - `GET /user/verify/{account_id}/{token}` - token redemption
//! - `GET /user/verified` - confirmation page

use axum::Router;

use crate::auth::{signin, signup, verified_page, verify_email};
use crate::server::state::AppState;

/// Add the account endpoints to the router.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/signup", axum::routing::post(signup))
        .route("/user/signin", axum::routing::post(signin))
        .route(
            "/user/verify/{account_id}/{token}",
            axum::routing::get(verify_email),
        )
        .route("/user/verified", axum::routing::get(verified_page))
}
