//! Verification Handlers
//!
//! `GET /user/verify/{account_id}/{token}` redeems a verification link and
//! redirects to the verified page: straight there on success, with
//! `error=true&message=...` in the query otherwise. The browser never sees
//! JSON on this route because the link is opened from an email client.
//!
//! `GET /user/verified` renders the confirmation page itself.

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::resolver::{resolve_verification, VerificationOutcome};

/// Handle a redemption attempt from an emailed verification link.
pub async fn verify_email(
    State(pool): State<Option<PgPool>>,
    Path((account_id, token)): Path<(Uuid, String)>,
) -> Redirect {
    tracing::info!("Verification attempt for account: {}", account_id);

    let Some(pool) = pool else {
        tracing::error!("Database not configured, cannot resolve verification");
        return error_redirect("An error occurred while checking the verification record");
    };

    match resolve_verification(&pool, account_id, &token).await {
        Ok(VerificationOutcome::Confirmed) => Redirect::to("/user/verified"),
        Ok(outcome) => {
            tracing::warn!(
                "Verification for account {} ended as {:?}",
                account_id,
                outcome
            );
            error_redirect(outcome.message())
        }
        Err(err) => {
            tracing::error!("Verification for account {} failed: {}", account_id, err);
            error_redirect("An error occurred while verifying the account")
        }
    }
}

fn error_redirect(message: &str) -> Redirect {
    Redirect::to(&format!(
        "/user/verified?error=true&message={}",
        urlencoding::encode(message)
    ))
}

/// Query parameters carried into the verified page by failure redirects.
#[derive(Debug, Deserialize)]
pub struct VerifiedParams {
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Serve the confirmation page.
pub async fn verified_page(Query(params): Query<VerifiedParams>) -> Html<String> {
    let message = if params.error.as_deref() == Some("true") {
        Some(params.message.as_deref().unwrap_or("Verification failed"))
    } else {
        None
    };

    Html(render_verified_page(message))
}

/// Render the static confirmation page, or its error variant when a failure
/// message was carried over.
fn render_verified_page(error_message: Option<&str>) -> String {
    let (heading, body) = match error_message {
        None => (
            "Email Verified".to_string(),
            "Your email address has been verified. You can now sign in to your account."
                .to_string(),
        ),
        Some(message) => ("Verification Failed".to_string(), escape_html(message)),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{heading}</title>
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <main>
        <h1>{heading}</h1>
        <p>{body}</p>
    </main>
</body>
</html>
"#
    )
}

/// Escape a string for embedding in HTML text. The message travels through
/// a client-controlled query parameter, so it cannot be trusted.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
