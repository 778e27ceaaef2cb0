//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_is_inclusive() {
        let validator = min(18_i64);
        assert!(validator.validate(&18).is_ok());
        assert!(validator.validate(&100).is_ok());
        assert!(validator.validate(&17).is_err());
        assert!(validator.validate(&-1).is_err());
    }

    #[test]
    fn test_min_error_params() {
        let err = min(18_i64).validate(&17).unwrap_err();
        assert_eq!(err.code, "min");
        assert_eq!(err.param("min"), Some("18"));
        assert_eq!(err.param("actual"), Some("17"));
    }
}
