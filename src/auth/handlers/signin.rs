//! Signin Handler
//!
//! `POST /user/signin` - the authentication workflow.
//!
//! An unknown email answers with the same generic wording and status code
//! as a wrong password, so the endpoint does not reveal which emails are
//! registered. An unverified account is the one case with distinct wording,
//! telling the user to check their inbox. The two failure shapes stay
//! separate error variants so callers inside the process can tell them
//! apart.

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{AccountData, ApiResponse, SigninRequest};
use crate::auth::users;
use crate::auth::validation::validate_signin;
use crate::error::AuthError;

/// Handle an authentication request.
///
/// # Errors
///
/// * `400 Bad Request` - empty credentials
/// * `401 Unauthorized` - unknown email or wrong password
/// * `403 Forbidden` - account exists but is not verified
/// * `503 Service Unavailable` - the database is not configured
pub async fn signin(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<ApiResponse>, AuthError> {
    let (email, password) = validate_signin(&request)?;
    tracing::info!("Signin request for email: {}", email);

    let pool = pool.ok_or_else(|| AuthError::unavailable("Database not configured"))?;

    let Some(account) = users::find_by_email(&pool, &email).await? else {
        tracing::warn!("Signin failed, no account for email: {}", email);
        return Err(AuthError::not_found("Invalid credentials entered!"));
    };

    if !account.verified {
        tracing::warn!("Signin rejected, account not verified: {}", account.id);
        return Err(AuthError::unverified(
            "Email hasn't been verified yet. Check your inbox.",
        ));
    }

    let valid = bcrypt::verify(&password, &account.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for account: {}", account.id);
        return Err(AuthError::mismatch("Invalid password entered!"));
    }

    tracing::info!("Signin successful: {} ({})", account.id, account.email);

    Ok(Json(ApiResponse::success(
        "Signin successful",
        AccountData::from(account),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signin_empty_credentials() {
        let request = SigninRequest {
            email: "  ".to_string(),
            password: "".to_string(),
        };

        let result = signin(State(None), Json(request)).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_signin_no_database() {
        let request = SigninRequest {
            email: "ada@x.com".to_string(),
            password: "longenough1".to_string(),
        };

        let result = signin(State(None), Json(request)).await;
        assert!(matches!(
            result.unwrap_err(),
            AuthError::Unavailable { .. }
        ));
    }
}
