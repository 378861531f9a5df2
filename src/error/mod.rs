//! Error types for the verimail server.
//!
//! Every workflow error is converted at the HTTP boundary into a structured
//! status + message response; nothing is allowed to crash the process.

pub mod conversion;
pub mod types;

pub use types::AuthError;
