//! Email Templates

/// Subject line of the verification email.
pub const VERIFICATION_SUBJECT: &str = "Verify Your Email";

/// HTML body of the verification email.
///
/// The link carries the plaintext token; this is the only place the
/// plaintext ever leaves the process.
pub fn verification_email_body(link: &str) -> String {
    format!(
        "<p>Verify your email address to complete the signup and login into your account.</p>\
         <p>This link <b>expires in 6 hours</b>.</p>\
         <p>Press <a href=\"{link}\">here</a> to proceed.</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_contains_link() {
        let link = "http://localhost:3000/user/verify/abc/def";
        let body = verification_email_body(link);
        assert!(body.contains(link));
    }

    #[test]
    fn test_body_mentions_expiry_window() {
        let body = verification_email_body("http://localhost:3000/user/verify/abc/def");
        assert!(body.contains("expires in 6 hours"));
    }
}
