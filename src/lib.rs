//! Verimail - Signup/Signin Backend with Email Verification
//!
//! Verimail accepts user registration, validates input, stores credentials
//! with salted bcrypt hashing, emails a time-limited verification link, and
//! confirms accounts when the link is redeemed.
//!
//! # Module Structure
//!
//! - **`auth`** - the account workflows: signup, signin, token issuance and
//!   the verification resolver
//! - **`email`** - SMTP delivery of the verification email
//! - **`error`** - the workflow error taxonomy and its HTTP conversion
//! - **`routes`** - route configuration
//! - **`server`** - startup, configuration and shared state
//!
//! # Usage
//!
//! ```rust,no_run
//! # async fn example() {
//! let app = verimail::server::create_app().await;
//! // Serve `app` with axum
//! # }
//! ```

pub mod auth;
pub mod email;
pub mod error;
pub mod routes;
pub mod server;
