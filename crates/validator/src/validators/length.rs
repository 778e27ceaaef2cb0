//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"ñandú123"`
//! has length 8 regardless of its byte size.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { char_len(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("Must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", char_len(input).to_string())
    }
    new(length: usize) { Self { length } }
    fn exact_length(length: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length() {
        let validator = min_length(8);
        assert!(validator.validate("12345678").is_ok());
        assert!(validator.validate("1234567").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        let validator = min_length(8);
        assert!(validator.validate("ñandú123").is_ok());
        assert!(validator.validate("ñandú12").is_err());
    }

    #[test]
    fn test_min_length_error_params() {
        let err = min_length(8).validate("Ab1@").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("8"));
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[test]
    fn test_exact_length() {
        let validator = exact_length(10);
        assert!(validator.validate("1234567890").is_ok());
        assert!(validator.validate("123456789").is_err());
        assert!(validator.validate("12345678901").is_err());
    }
}
