//! Client-side form validation.
//!
//! Login only checks that both fields are present. Signup applies the same
//! rules the server enforces, so an invalid form never leaves the device.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::SignupForm;

/// Characters accepted as the "special" character of a password.
pub const PASSWORD_SPECIALS: &[char] = &['_', '-', '@', '$', '!'];

/// Minimum password length for signup.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$").expect("valid email regex")
});

/// Password rule a signup form failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    TooShort,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    MissingSpecial,
    ContainsWhitespace,
}

impl PasswordRule {
    pub fn description(self) -> &'static str {
        match self {
            PasswordRule::TooShort => "must be at least 8 characters",
            PasswordRule::MissingLowercase => "needs a lowercase letter",
            PasswordRule::MissingUppercase => "needs an uppercase letter",
            PasswordRule::MissingDigit => "needs a digit",
            PasswordRule::MissingSpecial => "needs one of _ - @ $ !",
            PasswordRule::ContainsWhitespace => "must not contain whitespace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is empty")]
    EmptyEmail,
    #[error("password is empty")]
    EmptyPassword,
    #[error("name is empty")]
    EmptyName,
    #[error("email format is invalid")]
    InvalidEmail,
    #[error("password {}", .0.description())]
    WeakPassword(PasswordRule),
}

/// Checks the login preconditions: both fields non-empty.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

/// Checks a signup form against the server's acceptance rules.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if form.email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL_RE.is_match(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    check_password(&form.password).map_err(ValidationError::WeakPassword)
}

/// Rules are checked in a fixed order; the first failure is reported.
pub fn check_password(password: &str) -> Result<(), PasswordRule> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordRule::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordRule::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordRule::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRule::MissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(&c)) {
        return Err(PasswordRule::MissingSpecial);
    }
    if password.chars().any(char::is_whitespace) {
        return Err(PasswordRule::ContainsWhitespace);
    }
    Ok(())
}
