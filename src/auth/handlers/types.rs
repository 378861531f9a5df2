//! Account Handler Types
//!
//! Request and response types shared across the signup, signin and
//! verification handlers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Signup request body for `POST /user/signup`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    /// Plaintext password; hashed before storage, never persisted as-is
    pub password: String,
    /// Date of birth as `YYYY-MM-DD`
    pub date_of_birth: String,
}

/// Signin request body for `POST /user/signin`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Status field carried by every JSON response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
    /// Signup accepted, account awaiting email verification
    Pending,
}

/// The JSON envelope returned by signup and signin.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AccountData>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: AccountData) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Pending,
            message: message.into(),
            data: None,
        }
    }
}

/// Account information safe to return to clients; never includes the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AccountData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            date_of_birth: user.date_of_birth,
            verified: user.verified,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Success).unwrap(),
            "\"SUCCESS\""
        );
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Failed).unwrap(),
            "\"FAILED\""
        );
    }

    #[test]
    fn test_pending_response_omits_data() {
        let json =
            serde_json::to_value(ApiResponse::pending("Verification email sent")).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["message"], "Verification email sent");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_signup_request_uses_camel_case() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@x.com","password":"longenough1","dateOfBirth":"1990-01-01"}"#,
        )
        .unwrap();
        assert_eq!(request.date_of_birth, "1990-01-01");
    }

    #[test]
    fn test_account_data_never_carries_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            verified: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&AccountData::from(user)).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"dateOfBirth\":\"1990-01-01\""));
    }
}
