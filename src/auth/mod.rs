//! Account signup, signin and email verification.
//!
//! The module is organized around the verification-token lifecycle:
//!
//! - **`users`** - account records and their database operations
//! - **`verifications`** - pending verification records (the token ledger)
//! - **`tokens`** - token generation, hashed storage and email delivery
//! - **`resolver`** - the redemption state machine
//! - **`validation`** - input validation, kept separate from persistence
//! - **`handlers`** - the HTTP surface over the workflows

pub mod handlers;
pub mod resolver;
pub mod tokens;
pub mod users;
pub mod validation;
pub mod verifications;

pub use handlers::{signin, signup, verified_page, verify_email};
pub use resolver::{resolve_verification, VerificationOutcome};

/// Bcrypt cost factor used for both password and token hashing.
pub const BCRYPT_COST: u32 = 10;
