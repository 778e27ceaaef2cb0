//! Phone number validator for fixed-length local numbers.
//!
//! Two checks, in order: a digit check, then an exact length check. The
//! digit check has two modes because the historical rule only asks for the
//! *presence* of a digit, which lets `"abcdefghi9"` through. That rule stays
//! the default; [`PhoneMode::DigitsOnly`] is the opt-in strict form.

use crate::foundation::{Validate, ValidationError};

/// How the digit check treats non-digit characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PhoneMode {
    /// At least one `[0-9]` anywhere in the input.
    #[default]
    DigitPresent,
    /// Every character must be `[0-9]` (and there must be at least one).
    DigitsOnly,
}

/// Validates a phone number of a fixed character length.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{Phone, PhoneMode};
/// use formcheck_validator::foundation::Validate;
///
/// let phone = Phone::new(10);
/// assert!(phone.validate("1234567890").is_ok());
/// assert_eq!(phone.validate("abcdefghij").unwrap_err().code, "phone_digits");
/// assert_eq!(phone.validate("123456789").unwrap_err().code, "phone_length");
///
/// // The default mode only looks for one digit.
/// assert!(phone.validate("abcdefghi9").is_ok());
/// assert!(phone.mode(PhoneMode::DigitsOnly).validate("abcdefghi9").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    length: usize,
    mode: PhoneMode,
}

impl Phone {
    /// Creates a phone validator requiring exactly `length` characters.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            mode: PhoneMode::DigitPresent,
        }
    }

    /// Sets the digit check mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn mode(mut self, mode: PhoneMode) -> Self {
        self.mode = mode;
        self
    }

    /// Required length in characters.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    fn validate_digits(&self, input: &str) -> Result<(), ValidationError> {
        let ok = match self.mode {
            PhoneMode::DigitPresent => input.chars().any(|c| c.is_ascii_digit()),
            PhoneMode::DigitsOnly => {
                !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
            }
        };

        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone_digits",
                "Phone number must contain only digits",
            ))
        }
    }

    fn validate_length(&self, input: &str) -> Result<(), ValidationError> {
        let count = input.chars().count();
        if count == self.length {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone_length",
                format!("Phone number must have {} digits (found {count})", self.length),
            )
            .with_param("expected", self.length.to_string())
            .with_param("actual", count.to_string()))
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.validate_digits(input)?;
        self.validate_length(input)
    }
}

/// The digit check of a [`Phone`] on its own, for rule chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneDigits(pub Phone);

impl Validate for PhoneDigits {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate_digits(input)
    }
}

/// The length check of a [`Phone`] on its own, for rule chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneLength(pub Phone);

impl Validate for PhoneLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.0.validate_length(input)
    }
}

impl Phone {
    /// Splits the validator into its two ordered checks.
    #[must_use]
    pub fn into_rules(self) -> (PhoneDigits, PhoneLength) {
        (PhoneDigits(self), PhoneLength(self))
    }
}

// ============================================================================
// TESTS
// ============================================================================
