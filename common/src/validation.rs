use std::fmt;

use serde::Serialize;

/// Error codes exposed to consumers. These values are stable.
pub const USER_ID_INVALID: i32 = 100;
pub const NAME_INVALID: i32 = 101;
pub const PROVIDER_INVALID: i32 = 102;
pub const EXPIRATION_DATE_INVALID: i32 = 103;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: i32,
    pub message: String,
}

impl ValidationError {
    pub fn of(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_user_id() -> Self {
        Self::of(USER_ID_INVALID, "userId is invalid")
    }

    pub fn invalid_name() -> Self {
        Self::of(NAME_INVALID, "name is invalid")
    }

    pub fn invalid_provider() -> Self {
        Self::of(PROVIDER_INVALID, "provider is invalid")
    }

    pub fn invalid_expiration_date() -> Self {
        Self::of(EXPIRATION_DATE_INVALID, "expirationDate is invalid")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// Ordered list of validation errors. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn codes(&self) -> Vec<i32> {
        self.errors.iter().map(|e| e.code).collect()
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}
