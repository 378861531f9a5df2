//! Server Error Types
//!
//! This module defines the error taxonomy used by the signup, signin and
//! verification workflows. Each variant maps to an HTTP status code and a
//! fixed human-readable message; internal detail from the database or the
//! hashing primitive is logged but never echoed to the client.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the account workflows.
///
/// The input-shaped variants (`Validation`, `Conflict`, ...) carry the exact
/// user-facing message chosen at the call site. `Storage` and `Hash` wrap the
/// underlying library errors and are reported to clients with a generic
/// message only.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad input; nothing was persisted.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An account with the same email already exists.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// No matching account for the presented credentials.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The account exists but its email was never verified.
    #[error("Unverified account: {message}")]
    Unverified { message: String },

    /// A verification token past its expiry.
    #[error("Expired: {message}")]
    Expired { message: String },

    /// A token or password comparison failed.
    #[error("Mismatch: {message}")]
    Mismatch { message: String },

    /// The email transport failed after the ledger entry was persisted.
    #[error("Delivery error: {message}")]
    Delivery { message: String },

    /// A required collaborator (database, transport) is not configured.
    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    /// Any persistence operation failure.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Password or token hashing failure.
    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unverified(message: impl Into<String>) -> Self {
        Self::Unverified {
            message: message.into(),
        }
    }

    pub fn expired(message: impl Into<String>) -> Self {
        Self::Expired {
            message: message.into(),
        }
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch {
            message: message.into(),
        }
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    ///
    /// `NotFound` answers with 401 rather than 404: a signin against an
    /// unknown email must look like any other bad-credentials failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::UNAUTHORIZED,
            Self::Unverified { .. } => StatusCode::FORBIDDEN,
            Self::Expired { .. } => StatusCode::GONE,
            Self::Mismatch { .. } => StatusCode::UNAUTHORIZED,
            Self::Delivery { .. } => StatusCode::BAD_GATEWAY,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotFound { message }
            | Self::Unverified { message }
            | Self::Expired { message }
            | Self::Mismatch { message }
            | Self::Delivery { message }
            | Self::Unavailable { message } => message.clone(),
            Self::Storage(_) | Self::Hash(_) => {
                "An unexpected error occurred while processing the request.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AuthError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::conflict("exists").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::unverified("check inbox").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AuthError::expired("gone").status_code(), StatusCode::GONE);
        assert_eq!(
            AuthError::delivery("send failed").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AuthError::unavailable("no database").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_credential_failures_share_status() {
        // Unknown email and wrong password must be indistinguishable at the
        // HTTP level.
        assert_eq!(
            AuthError::not_found("Invalid credentials entered!").status_code(),
            AuthError::mismatch("Invalid password entered!").status_code()
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = AuthError::validation("Empty input fields!");
        assert_eq!(err.message(), "Empty input fields!");
    }

    #[test]
    fn test_storage_detail_is_hidden() {
        let err = AuthError::Storage(sqlx::Error::RowNotFound);
        let message = err.message();
        assert!(!message.contains("row"));
        assert_eq!(
            message,
            "An unexpected error occurred while processing the request."
        );
    }
}
