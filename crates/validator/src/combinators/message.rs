//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Built-in rules carry generic messages; the form layer wraps them with
/// the user-facing wording.
///
/// ```
/// use formcheck_validator::prelude::*;
///
/// let rule = min_length(8).with_message("Password must be at least 8 characters");
/// let err = rule.validate("short").unwrap_err();
/// assert_eq!(err.message, "Password must be at least 8 characters");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            let message = if self.message.is_empty() {
                original.message.clone()
            } else {
                Cow::Owned(self.message.clone())
            };

            let mut replaced = ValidationError::new(code, message);
            replaced.params.clone_from(&original.params);
            replaced.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
