//! Tunable thresholds for the form rules.

use crate::validators::PhoneMode;

/// Thresholds and character sets used by the form rules.
///
/// The default policy reproduces the fixed message catalog exactly; the
/// message helpers below render the same wording for other values.
///
/// Deserializes with every field optional:
///
/// ```toml
/// password_min_length = 10
/// min_age = 21
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct FormPolicy {
    /// Minimum password length in characters.
    pub password_min_length: usize,
    /// Characters that count as "special" in a password.
    pub password_special_chars: String,
    /// Exact phone number length in characters.
    pub phone_length: usize,
    /// How strictly the phone digit check is applied.
    pub phone_mode: PhoneMode,
    /// Minimum accepted age (inclusive).
    pub min_age: i64,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            password_special_chars: "@#$%^&+=".to_owned(),
            phone_length: 10,
            phone_mode: PhoneMode::DigitPresent,
            min_age: 18,
        }
    }
}

/// A policy that cannot produce meaningful rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// `password_min_length` is zero.
    #[error("password_min_length must be at least 1")]
    ZeroPasswordLength,

    /// `password_special_chars` is empty, so no password could pass.
    #[error("password_special_chars must not be empty")]
    EmptySpecialChars,

    /// A "special" character that is a letter, digit or whitespace.
    #[error("password_special_chars contains non-special character {0:?}")]
    NotSpecial(char),

    /// `phone_length` is zero.
    #[error("phone_length must be at least 1")]
    ZeroPhoneLength,
}

impl FormPolicy {
    /// Checks that the policy is usable.
    pub fn check(&self) -> Result<(), PolicyError> {
        if self.password_min_length == 0 {
            return Err(PolicyError::ZeroPasswordLength);
        }
        if self.password_special_chars.is_empty() {
            return Err(PolicyError::EmptySpecialChars);
        }
        if let Some(c) = self
            .password_special_chars
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(PolicyError::NotSpecial(c));
        }
        if self.phone_length == 0 {
            return Err(PolicyError::ZeroPhoneLength);
        }
        Ok(())
    }

    pub(crate) fn password_length_message(&self) -> String {
        format!(
            "Password must be at least {} characters",
            self.password_min_length
        )
    }

    pub(crate) fn password_special_message(&self) -> String {
        format!(
            "Must contain 1 special character ({})",
            self.password_special_chars
        )
    }

    pub(crate) fn phone_length_message(&self) -> String {
        format!("Must contain {} digits", self.phone_length)
    }

    pub(crate) fn age_message(&self) -> String {
        format!("Age must be {} or older", self.min_age)
    }
}
