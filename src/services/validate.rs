//! Field-level form validation for the profile, signup, and password
//! flows. Advisory only: a failed rule blocks submission with an inline
//! message, nothing here ever panics or performs I/O.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Digits with optional leading +, spaces, hyphens, parens; at least ten
// significant characters.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern"));

/// Which flow a password is being entered for. The minimums are
/// intentionally context-specific and match the deployed forms: the login
/// and reset forms accept 6, signup and change-password demand 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordContext {
    Login,
    Signup,
    Reset,
    Change,
}

impl PasswordContext {
    pub fn min_len(self) -> usize {
        match self {
            PasswordContext::Login | PasswordContext::Reset => 6,
            PasswordContext::Signup | PasswordContext::Change => 8,
        }
    }
}

/// The closed set of validatable fields. Cross-field rules carry the
/// sibling value they compare against.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Name,
    Email,
    Contact,
    GstNumber,
    Password(PasswordContext),
    ConfirmPassword { password: &'a str },
    NewPassword { current_password: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid contact number")]
    InvalidContact,
    #[error("GST number must be 15 characters")]
    GstLength,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("New password must be different from current password")]
    PasswordUnchanged,
}

/// Validates a single field value. Re-validating the same pair always
/// yields the same result.
pub fn validate(field: Field<'_>, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(FieldError::Required("Name"))
            } else if trimmed.chars().count() < 2 {
                Err(FieldError::NameTooShort)
            } else {
                Ok(())
            }
        }
        Field::Email => {
            if value.trim().is_empty() {
                Err(FieldError::Required("Email"))
            } else if !EMAIL_RE.is_match(value) {
                Err(FieldError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        Field::Contact => {
            if value.trim().is_empty() {
                Err(FieldError::Required("Contact"))
            } else if !PHONE_RE.is_match(value) {
                Err(FieldError::InvalidContact)
            } else {
                Ok(())
            }
        }
        Field::GstNumber => {
            // Optional field: empty passes, anything else must be the full
            // 15-character GSTIN.
            if !value.trim().is_empty() && value.chars().count() != 15 {
                Err(FieldError::GstLength)
            } else {
                Ok(())
            }
        }
        Field::Password(context) => {
            if value.is_empty() {
                Err(FieldError::Required("Password"))
            } else if value.chars().count() < context.min_len() {
                Err(FieldError::PasswordTooShort(context.min_len()))
            } else {
                Ok(())
            }
        }
        Field::ConfirmPassword { password } => {
            if value.is_empty() {
                Err(FieldError::ConfirmRequired)
            } else if value != password {
                Err(FieldError::PasswordMismatch)
            } else {
                Ok(())
            }
        }
        Field::NewPassword { current_password } => {
            let min = PasswordContext::Change.min_len();
            if value.is_empty() {
                Err(FieldError::Required("New password"))
            } else if value.chars().count() < min {
                Err(FieldError::PasswordTooShort(min))
            } else if value == current_password {
                Err(FieldError::PasswordUnchanged)
            } else {
                Ok(())
            }
        }
    }
}

/// Additive strength meter used by the signup form: one point each for
/// length ≥ 8, an uppercase letter, a digit, and a special character.
pub fn strength_score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn score_label(score: u8) -> Option<&'static str> {
    match score {
        1 => Some("Weak"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Strong"),
        _ => None,
    }
}

/// Weighted 0–100 meter used by the change-password form. Same underlying
/// signal as [`strength_score`] on a percentage scale.
pub fn strength_percent(password: &str) -> f32 {
    let mut percent: f32 = 0.0;
    if password.chars().count() >= 8 {
        percent += 25.0;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        percent += 25.0;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        percent += 25.0;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        percent += 12.5;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        percent += 12.5;
    }
    percent.min(100.0)
}

pub fn percent_label(percent: f32) -> &'static str {
    if percent < 30.0 {
        "Weak"
    } else if percent < 70.0 {
        "Medium"
    } else {
        "Strong"
    }
}
