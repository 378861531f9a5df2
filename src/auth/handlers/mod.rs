//! HTTP handlers for the account endpoints.

pub mod signin;
pub mod signup;
pub mod types;
pub mod verify;

pub use signin::signin;
pub use signup::signup;
pub use verify::{verified_page, verify_email};
