//! Input validation utilities

use crate::{error::AuthError, models::Credentials};

const MAX_EMAIL_LENGTH: usize = 254;

/// Trim and lowercase an email so that lookups and uniqueness are
/// case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check presence of both fields and normalize the email
///
/// `None` stands for a field that was absent or not a string in the request.
pub fn validate_credentials(
    email: Option<&str>,
    password: Option<&str>,
) -> Result<Credentials, AuthError> {
    let (email, password) = match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AuthError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }
    };

    let email = normalize_email(email);
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(AuthError::InvalidInput(
            "Invalid email or password".to_string(),
        ));
    }

    Ok(Credentials {
        email,
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email(" A@B.com "), "a@b.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
    }

    #[test]
    fn accepts_present_fields() {
        let credentials = validate_credentials(Some("  User@Example.COM"), Some("pw1")).unwrap();
        assert_eq!(credentials.email, "user@example.com");
        assert_eq!(credentials.password, "pw1");
    }

    #[test]
    fn rejects_missing_fields() {
        for (email, password) in [
            (None, Some("pw")),
            (Some("a@b.com"), None),
            (Some(""), Some("pw")),
            (Some("a@b.com"), Some("")),
            (None, None),
        ] {
            let error = validate_credentials(email, password).unwrap_err();
            assert_eq!(error.to_string(), "Email and password are required");
        }
    }

    #[test]
    fn rejects_whitespace_only_email() {
        let error = validate_credentials(Some("   "), Some("pw")).unwrap_err();
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn rejects_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            validate_credentials(Some(&email), Some("pw")),
            Err(AuthError::InvalidInput(_))
        ));
    }
}
