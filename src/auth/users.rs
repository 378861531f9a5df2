//! Account Records and Database Operations
//!
//! The credential store. Accounts are created by the signup workflow with
//! `verified = false`; only the verification resolver flips the flag, and
//! only the expiry cleanup deletes an account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// An account in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique account ID (UUID v4, generated server-side)
    pub id: Uuid,
    /// Display name (letters and spaces)
    pub name: String,
    /// Email address; unique in practice, not enforced by a constraint
    pub email: String,
    /// Bcrypt hash of the password, never the plaintext
    pub password_hash: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Whether the email address has been verified
    pub verified: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new account with `verified = false`.
pub async fn create_account(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    date_of_birth: NaiveDate,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, date_of_birth, verified, created_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6)
        RETURNING id, name, email, password_hash, date_of_birth, verified, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(date_of_birth)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Look up an account by email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, date_of_birth, verified, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Look up an account by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, date_of_birth, verified, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Mark an account as verified.
///
/// Setting the flag on an already-verified account is a no-op, which keeps
/// concurrent redemptions of the same token idempotent in effect.
pub async fn mark_verified(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET verified = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete an account.
///
/// Deleting an already-deleted account affects zero rows and is not an
/// error; the expiry cleanup relies on this.
pub async fn delete_account(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
