//! Registration and login input validation.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest accepted display name, in characters.
pub const MAX_DISPLAY_NAME_LEN: usize = 64;

/// A registration request after validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Trimmed, lower-cased email.
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Registration {
    /// Validate raw registration fields.
    ///
    /// A missing or blank `name` defaults to the local part of the email.
    pub fn validate(email: &str, name: Option<&str>, password: &str) -> Result<Self, CoreError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(CoreError::Validation("email is required".into()));
        }
        if !email.validate_email() {
            return Err(CoreError::Validation(format!("'{email}' is not a valid email")));
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }

        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) if n.chars().count() > MAX_DISPLAY_NAME_LEN => {
                return Err(CoreError::Validation(format!(
                    "name must be at most {MAX_DISPLAY_NAME_LEN} characters"
                )));
            }
            Some(n) => n.to_string(),
            None => email.split('@').next().unwrap_or_default().to_string(),
        };

        Ok(Self {
            email,
            name,
            password: password.to_string(),
        })
    }
}

/// Emails are matched case-insensitively by storing them lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn valid_registration_normalizes_email() {
        let r =
            Registration::validate(" Alice@Example.COM ", Some("Alice"), "hunter2hunter2").unwrap();
        assert_eq!(r.email, "alice@example.com");
        assert_eq!(r.name, "Alice");
    }

    #[test]
    fn name_defaults_to_email_local_part() {
        let r = Registration::validate("bob@example.com", None, "longenough").unwrap();
        assert_eq!(r.name, "bob");
        let r = Registration::validate("bob@example.com", Some("  "), "longenough").unwrap();
        assert_eq!(r.name, "bob");
    }

    #[test]
    fn rejects_bad_email() {
        assert_matches!(
            Registration::validate("not-an-email", None, "longenough"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            Registration::validate("", None, "longenough"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_short_password() {
        let err = Registration::validate("a@example.com", None, "short").unwrap_err();
        assert!(err.to_string().contains("at least 8 characters"));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "n".repeat(MAX_DISPLAY_NAME_LEN + 1);
        assert!(Registration::validate("a@example.com", Some(&name), "longenough").is_err());
    }
}
