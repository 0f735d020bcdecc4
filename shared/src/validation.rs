use regex::Regex;
use std::sync::OnceLock;

use crate::config::ValidationRules;
use crate::form::FormState;
use crate::types::{Credentials, Identifier, Login};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // Unanchored: any local@domain.tld run inside the value passes.
    EMAIL.get_or_init(|| Regex::new(r"[^@\s]+@[^@\s]+\.[^@\s]+").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Only ASCII digits count; spaces, dashes and brackets are ignored.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Length in UTF-16 code units, the way the browser counts an input value.
pub fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Checks the active identifier, then the password. Stops at the first
/// failure, so at most one message is ever reported.
pub fn validate(form: &FormState, rules: &ValidationRules) -> Result<Credentials, ValidationError> {
    let login = match form.identifier() {
        Identifier::Email(email) => {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail);
            }
            Login::Email(email.to_string())
        }
        Identifier::Phone {
            country_code,
            number,
        } => {
            let digits = phone_digits(number);
            if digits.len() < rules.min_phone_digits {
                return Err(ValidationError::InvalidPhone);
            }
            Login::Phone {
                country_code,
                digits,
            }
        }
    };

    if password_len(&form.password) < rules.min_password_len {
        return Err(ValidationError::PasswordTooShort(rules.min_password_len));
    }

    Ok(Credentials {
        login,
        password: form.password.clone(),
        remember_me: form.remember_me,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormAction;
    use crate::types::{CountryCode, SignInMode};

    fn email_form(email: &str, password: &str) -> FormState {
        let mut form = FormState::default();
        form.apply(FormAction::SetEmail(email.into()));
        form.apply(FormAction::SetPassword(password.into()));
        form
    }

    fn phone_form(phone: &str, password: &str) -> FormState {
        let mut form = FormState::default();
        form.apply(FormAction::SelectMode(SignInMode::Phone));
        form.apply(FormAction::SetPhone(phone.into()));
        form.apply(FormAction::SetPassword(password.into()));
        form
    }

    #[test]
    fn rejects_malformed_emails() {
        let rules = ValidationRules::default();
        for email in ["", "userexample.com", "user@example", "user @example.com", "@example.com"] {
            assert_eq!(
                validate(&email_form(email, "secret1"), &rules),
                Err(ValidationError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_email_and_builds_credentials() {
        let creds = validate(&email_form("user@example.com", "secret1"), &ValidationRules::default())
            .unwrap();
        assert_eq!(creds.login, Login::Email("user@example.com".into()));
        assert_eq!(creds.password, "secret1");
        assert!(creds.remember_me);
    }

    #[test]
    fn phone_needs_eight_digits() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate(&phone_form("1234567", "secret1"), &rules),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate(&phone_form("(12) 34-56 7", "secret1"), &rules),
            Err(ValidationError::InvalidPhone)
        );
        assert!(validate(&phone_form("1234-5678", "secret1"), &rules).is_ok());
    }

    #[test]
    fn phone_digits_are_normalised() {
        let creds = validate(&phone_form("98765 43210", "secret1"), &ValidationRules::default())
            .unwrap();
        assert_eq!(
            creds.login,
            Login::Phone {
                country_code: CountryCode::India,
                digits: "9876543210".into(),
            }
        );
    }

    #[test]
    fn short_password_is_reported_after_identifier_passes() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate(&email_form("user@example.com", "abc12"), &rules),
            Err(ValidationError::PasswordTooShort(6))
        );
        assert_eq!(
            validate(&phone_form("98765 43210", "abc12"), &rules),
            Err(ValidationError::PasswordTooShort(6))
        );
    }

    #[test]
    fn identifier_error_wins_over_password_error() {
        assert_eq!(
            validate(&email_form("nope", "x"), &ValidationRules::default()),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn inactive_field_is_not_checked() {
        // A bad email must not block a phone sign-in.
        let mut form = phone_form("98765 43210", "secret1");
        form.apply(FormAction::SetEmail("garbage".into()));
        assert!(validate(&form, &ValidationRules::default()).is_ok());
    }

    #[test]
    fn messages_match_the_page() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
        assert_eq!(
            ValidationError::PasswordTooShort(6).to_string(),
            "Password must be at least 6 characters."
        );
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(password_len("abcdef"), 6);
        assert_eq!(password_len("\u{1F511}abcd"), 6);
    }
}
