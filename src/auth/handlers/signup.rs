//! Signup Handler
//!
//! `POST /user/signup` - the registration workflow.
//!
//! Ordering is strict and must stay that way: validate, duplicate-check,
//! hash the password, insert the account, then hand off to token issuance.
//! On any validation failure nothing is persisted. A delivery failure after
//! the ledger write is reported as FAILED but the account and its pending
//! verification remain.
//!
//! Note the duplicate check and the insert are not atomic; two concurrent
//! signups with the same email can both pass the check and both insert.
//! The store keeps no uniqueness constraint, so this stays a best-effort
//! check.

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ApiResponse, SignupRequest};
use crate::auth::validation::validate_signup;
use crate::auth::{tokens, users, BCRYPT_COST};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Handle a registration request.
///
/// # Errors
///
/// * `400 Bad Request` - a field failed validation
/// * `409 Conflict` - an account with the email already exists
/// * `502 Bad Gateway` - the verification email could not be sent
/// * `503 Service Unavailable` - the database is not configured
/// * `500 Internal Server Error` - hashing or persistence failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse>, AuthError> {
    tracing::info!("Signup request for email: {}", request.email);

    let input = validate_signup(&request)?;

    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| AuthError::unavailable("Database not configured"))?;

    if users::find_by_email(pool, &input.email).await?.is_some() {
        tracing::warn!("Signup rejected, email already registered: {}", input.email);
        return Err(AuthError::conflict(
            "User with the provided email already exists",
        ));
    }

    let password_hash = bcrypt::hash(&input.password, BCRYPT_COST)?;

    let account = users::create_account(
        pool,
        &input.name,
        &input.email,
        &password_hash,
        input.date_of_birth,
    )
    .await?;
    tracing::info!("Account created: {} ({})", account.id, account.email);

    tokens::issue_verification(
        pool,
        state.mailer.as_deref(),
        &state.config.app_url,
        account.id,
        &account.email,
    )
    .await?;

    Ok(Json(ApiResponse::pending("Verification email sent")))
}
