//! Verification Resolution
//!
//! The state machine behind token redemption. Given `(account_id, token)`
//! from an inbound verification link, exactly one of four terminal outcomes
//! is reached:
//!
//! - `NoRecord` - no pending verification for the account: it never
//!   existed, was never pending, or was already verified and its ledger
//!   entry removed. A second redemption of an already-confirmed token lands
//!   here rather than in an error, which keeps redemption idempotent.
//! - `Expired` - the record is past its expiry. Side effects: the record
//!   AND the unverified account are deleted, reclaiming storage for
//!   abandoned signups and forcing re-registration.
//! - `TokenMismatch` - the presented token does not match the stored hash.
//!   The record is left intact so the legitimate link still works.
//! - `Confirmed` - the token matches before expiry. The account is marked
//!   verified and the record deleted (single-use enforcement).
//!
//! Storage failures during a transition surface as `AuthError::Storage`,
//! distinct from the outcomes; no partial state is rolled back.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{tokens, users, verifications};
use crate::error::AuthError;

/// Terminal states of a redemption attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Confirmed,
    Expired,
    TokenMismatch,
    NoRecord,
}

impl VerificationOutcome {
    /// The user-facing message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Confirmed => "Email verified successfully",
            Self::Expired => "Link has expired. Please sign up again",
            Self::TokenMismatch => "Invalid verification details passed. Check your inbox.",
            Self::NoRecord => {
                "Account record doesn't exist or has been verified already. Please sign up or log in."
            }
        }
    }
}

/// Whether a ledger entry is past its expiry at `now`.
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at < now
}

/// Resolve a redemption attempt for `(account_id, token)`.
pub async fn resolve_verification(
    pool: &PgPool,
    account_id: Uuid,
    token: &str,
) -> Result<VerificationOutcome, AuthError> {
    let Some(pending) = verifications::find_by_account(pool, account_id).await? else {
        return Ok(VerificationOutcome::NoRecord);
    };

    if is_expired(pending.expires_at, Utc::now()) {
        // Expired: reclaim both the record and the abandoned account. The
        // deletes are deliberate no-ops when a concurrent redemption got
        // there first.
        verifications::delete_by_account(pool, account_id).await?;
        users::delete_account(pool, account_id).await?;
        tracing::info!(
            "Expired verification for account {} cleaned up (expired {})",
            account_id,
            pending.expires_at
        );
        return Ok(VerificationOutcome::Expired);
    }

    if !tokens::token_matches(token, &pending.token_hash)? {
        return Ok(VerificationOutcome::TokenMismatch);
    }

    users::mark_verified(pool, account_id).await?;
    verifications::delete_by_account(pool, account_id).await?;
    tracing::info!("Account {} verified", account_id);

    Ok(VerificationOutcome::Confirmed)
}
