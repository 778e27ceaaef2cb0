//! Character-class presence validators
//!
//! Each rule asks whether *at least one* character of a class occurs in
//! the input. Classes are ASCII: `É` does not satisfy [`HasUppercase`].

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string contains an ASCII uppercase letter (`[A-Z]`).
    pub HasUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) { ValidationError::new("uppercase", "Must contain an uppercase letter") }
    fn has_uppercase();
}

crate::validator! {
    /// Validates that a string contains an ASCII lowercase letter (`[a-z]`).
    pub HasLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) { ValidationError::new("lowercase", "Must contain a lowercase letter") }
    fn has_lowercase();
}

crate::validator! {
    /// Validates that a string contains an ASCII digit (`[0-9]`).
    pub HasDigit for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("digit", "Must contain a digit") }
    fn has_digit();
}

crate::validator! {
    /// Validates that a string contains at least one character from a set.
    #[derive(PartialEq, Eq, Hash)]
    pub ContainsAnyOf { chars: String } for str;
    rule(self, input) { input.chars().any(|c| self.chars.contains(c)) }
    error(self, input) {
        ValidationError::new(
            "contains_any_of",
            format!("Must contain one of ({})", self.chars),
        )
        .with_param("chars", self.chars.clone())
    }
    new(chars: impl Into<String>) { Self { chars: chars.into() } }
    fn contains_any_of(chars: impl Into<String>);
}
