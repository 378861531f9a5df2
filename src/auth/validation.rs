//! Input Validation
//!
//! Validation is kept separate from persistence: these functions inspect
//! request payloads and either return the trimmed, parsed values or a
//! validation error with the user-facing message. Nothing here touches the
//! database.

use chrono::NaiveDate;

use crate::auth::handlers::types::{SigninRequest, SignupRequest};
use crate::error::AuthError;

/// Minimum password length enforced at signup.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A signup payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
}

/// Validate a signup request.
///
/// All fields are trimmed first. Checks run in a fixed order and the first
/// failure wins, so the caller always reports a single reason.
pub fn validate_signup(request: &SignupRequest) -> Result<SignupInput, AuthError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let password = request.password.trim();
    let date_of_birth = request.date_of_birth.trim();

    if name.is_empty() || email.is_empty() || password.is_empty() || date_of_birth.is_empty() {
        return Err(AuthError::validation("Empty input fields!"));
    }

    if !is_valid_name(name) {
        return Err(AuthError::validation("Invalid name entered"));
    }

    if !is_valid_email(email) {
        return Err(AuthError::validation("Invalid email entered"));
    }

    let date_of_birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
        .map_err(|_| AuthError::validation("Invalid date of birth entered"))?;

    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation("Password is too short!"));
    }

    Ok(SignupInput {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        date_of_birth,
    })
}

/// Validate a signin request, returning the trimmed email and password.
pub fn validate_signin(request: &SigninRequest) -> Result<(String, String), AuthError> {
    let email = request.email.trim();
    let password = request.password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(AuthError::validation("Empty credentials supplied"));
    }

    Ok((email.to_string(), password.to_string()))
}

/// Names may only contain letters and spaces.
fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Basic email validation: a single `@` with a non-empty local part and a
/// dotted domain.
fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_request(name: &str, email: &str, password: &str, dob: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            date_of_birth: dob.to_string(),
        }
    }

    fn validation_message(err: AuthError) -> String {
        match err {
            AuthError::Validation { message } => message,
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_signup_is_trimmed() {
        let request = signup_request("  Ada Lovelace ", " ada@x.com ", " longenough1 ", " 1990-01-01 ");
        let input = validate_signup(&request).unwrap();
        assert_eq!(input.name, "Ada Lovelace");
        assert_eq!(input.email, "ada@x.com");
        assert_eq!(input.password, "longenough1");
        assert_eq!(
            input.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_empty_fields() {
        let request = signup_request("   ", "ada@x.com", "longenough1", "1990-01-01");
        let err = validate_signup(&request).unwrap_err();
        assert_eq!(validation_message(err), "Empty input fields!");
    }

    #[test]
    fn test_invalid_name() {
        for name in ["Ada99", "Ada_Lovelace", "Ada!"] {
            let request = signup_request(name, "ada@x.com", "longenough1", "1990-01-01");
            let err = validate_signup(&request).unwrap_err();
            assert_eq!(validation_message(err), "Invalid name entered");
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let request = signup_request("Ada", "not-an-email", "longenough1", "1990-01-01");
        let err = validate_signup(&request).unwrap_err();
        assert_eq!(validation_message(err), "Invalid email entered");
    }

    #[test]
    fn test_invalid_date_of_birth() {
        for dob in ["not-a-date", "1990-02-30", "01/01/1990"] {
            let request = signup_request("Ada", "ada@x.com", "longenough1", dob);
            let err = validate_signup(&request).unwrap_err();
            assert_eq!(validation_message(err), "Invalid date of birth entered");
        }
    }

    #[test]
    fn test_password_minimum_length_is_enforced() {
        let request = signup_request("Ada", "ada@x.com", "short12", "1990-01-01");
        let err = validate_signup(&request).unwrap_err();
        assert_eq!(validation_message(err), "Password is too short!");

        // Exactly eight characters passes.
        let request = signup_request("Ada", "ada@x.com", "eight8ch", "1990-01-01");
        assert!(validate_signup(&request).is_ok());
    }

    #[test]
    fn test_valid_signin_is_trimmed() {
        let request = SigninRequest {
            email: " ada@x.com ".to_string(),
            password: " longenough1 ".to_string(),
        };
        let (email, password) = validate_signin(&request).unwrap();
        assert_eq!(email, "ada@x.com");
        assert_eq!(password, "longenough1");
    }

    #[test]
    fn test_empty_signin_credentials() {
        let request = SigninRequest {
            email: "".to_string(),
            password: "longenough1".to_string(),
        };
        let err = validate_signin(&request).unwrap_err();
        assert_eq!(validation_message(err), "Empty credentials supplied");
    }
}
