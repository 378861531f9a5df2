//! Verification Token Issuance
//!
//! Given a freshly created account, produce a single-use verification token,
//! persist only its bcrypt hash in the ledger, and attempt delivery by
//! email. The plaintext token exists only inside the outbound link.
//!
//! The ledger entry is written before the email is sent; a delivery failure
//! is reported as a distinguishable outcome and the entry is NOT rolled
//! back, so the account stays pending with an undeliverable token until it
//! expires.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{verifications, BCRYPT_COST};
use crate::email::Mailer;
use crate::error::AuthError;

/// Verification tokens expire this many hours after issuance.
pub const TOKEN_TTL_HOURS: i64 = 6;

/// Compose a plaintext verification token for an account.
///
/// A random unique string concatenated with the account id, so a token is
/// bound to one account even in the theoretical case of a generator
/// collision.
pub fn compose_token(account_id: Uuid) -> String {
    format!("{}{}", Uuid::new_v4(), account_id)
}

/// Hash a plaintext token for storage in the ledger.
pub fn hash_token(token: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(token, BCRYPT_COST)
}

/// Compare a presented plaintext token against a stored hash.
pub fn token_matches(token: &str, token_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(token, token_hash)
}

/// Issue a verification token for an account and send the link by email.
///
/// Side effects: one ledger write, one outbound email. The account record
/// itself is untouched.
pub async fn issue_verification(
    pool: &PgPool,
    mailer: Option<&Mailer>,
    app_url: &str,
    account_id: Uuid,
    email: &str,
) -> Result<(), AuthError> {
    let token = compose_token(account_id);
    let token_hash = hash_token(&token)?;

    let created_at = Utc::now();
    let expires_at = created_at + Duration::hours(TOKEN_TTL_HOURS);

    verifications::create_pending(pool, account_id, &token_hash, created_at, expires_at).await?;
    tracing::info!(
        "Verification record created for account {} (expires {})",
        account_id,
        expires_at
    );

    let link = format!(
        "{}/user/verify/{}/{}",
        app_url.trim_end_matches('/'),
        account_id,
        token
    );

    let Some(mailer) = mailer else {
        tracing::error!("Email transport not configured, verification email not sent");
        return Err(AuthError::delivery("Verification email failed"));
    };

    mailer.send_verification(email, &link).await?;
    tracing::info!("Verification email sent to {}", email);

    Ok(())
}
