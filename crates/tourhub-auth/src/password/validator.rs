//! Password policy enforcement for new passwords.

use tourhub_core::config::auth::AuthConfig;
use tourhub_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Minimum zxcvbn score (0-4).
    min_score: u8,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.min_password_length,
            min_score: config.min_password_score.min(4),
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if (estimate.score() as u8) < self.min_score {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password.",
            ));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator {
            min_length: 8,
            min_score: 2,
        }
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(validator().validate("short").is_err());
    }

    #[test]
    fn test_rejects_weak_password() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn test_accepts_strong_password() {
        assert!(validator().validate("tangerine-orbit-42").is_ok());
    }

    #[test]
    fn test_rejects_unchanged_password() {
        assert!(validator().validate_not_same("same-pass-1", "same-pass-1").is_err());
        assert!(validator().validate_not_same("old-pass-1", "new-pass-2").is_ok());
    }
}
