//! Email address validator

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// local-part `@` label, then one or more `.label` groups. No whitespace
// anywhere, whole-string match.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is a valid regex")
});

crate::validator! {
    /// Validates email address format.
    ///
    /// Accepts `local@domain.tld` where the domain contains at least one dot.
    /// There is no overall length cap, but each part is bounded: at most 256
    /// characters before the `@`, 65 in the first domain label and 26 in each
    /// label after a dot.
    ///
    /// ```
    /// use formcheck_validator::prelude::*;
    ///
    /// assert!(email().validate("user@example.com").is_ok());
    /// assert!(email().validate("user@localhost").is_err());
    /// ```
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}
