//! Pending Verification Records
//!
//! The verification ledger: one row per account awaiting email
//! verification, holding the bcrypt hash of the outstanding token and its
//! expiry. The plaintext token is never persisted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A pending verification in the `user_verifications` table.
///
/// At most one live record per account at a time by design; the table does
/// not enforce this with a uniqueness constraint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PendingVerification {
    pub id: Uuid,
    /// Back-reference to the account (lookup relation, not ownership)
    pub account_id: Uuid,
    /// Bcrypt hash of the plaintext token
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Insert a pending verification for an account.
pub async fn create_pending(
    pool: &PgPool,
    account_id: Uuid,
    token_hash: &str,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Result<PendingVerification, sqlx::Error> {
    let id = Uuid::new_v4();

    let pending = sqlx::query_as::<_, PendingVerification>(
        r#"
        INSERT INTO user_verifications (id, account_id, token_hash, created_at, expires_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, account_id, token_hash, created_at, expires_at
        "#,
    )
    .bind(id)
    .bind(account_id)
    .bind(token_hash)
    .bind(created_at)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(pending)
}

/// Look up the pending verification for an account.
pub async fn find_by_account(
    pool: &PgPool,
    account_id: Uuid,
) -> Result<Option<PendingVerification>, sqlx::Error> {
    let pending = sqlx::query_as::<_, PendingVerification>(
        r#"
        SELECT id, account_id, token_hash, created_at, expires_at
        FROM user_verifications
        WHERE account_id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    Ok(pending)
}

/// Delete the pending verification for an account.
///
/// Zero affected rows is success: a concurrent redemption may have deleted
/// the record first.
pub async fn delete_by_account(pool: &PgPool, account_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_verifications WHERE account_id = $1")
        .bind(account_id)
        .execute(pool)
        .await?;

    Ok(())
}
