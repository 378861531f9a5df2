//! Outbound email delivery.
//!
//! The SMTP transport is built once at startup and shared for the process
//! lifetime; the verification email is the only message this server sends.

pub mod mailer;
pub mod templates;

pub use mailer::{Mailer, SmtpConfig};
