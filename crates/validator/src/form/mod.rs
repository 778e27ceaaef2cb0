//! Sign-up form rules: email, password, phone and age.
//!
//! The free functions here use the default [`FormPolicy`]; build a
//! [`FormValidator`] to change thresholds.
//!
//! | Field | Rules, in priority order |
//! |---|---|
//! | email | `local@domain.tld` grammar |
//! | password | length ≥ 8, `[A-Z]`, `[a-z]`, one of `@#$%^&+=` |
//! | phone | contains a digit, exactly 10 characters |
//! | age | present and ≥ 18 |
//!
//! ```
//! use formcheck_validator::form::{self, Field, Verdict};
//!
//! assert_eq!(
//!     form::validate_password("alllowercase1@"),
//!     Verdict::invalid("Must contain 1 uppercase character"),
//! );
//!
//! let result = form::evaluate_form("user@x.com", "Abcdefg1@", "123", Some(20));
//! assert!(!result.is_accepted());
//! assert_eq!(
//!     result.failures().collect::<Vec<_>>(),
//!     [(Field::Phone, "Must contain 10 digits")],
//! );
//! ```
//!
//! The phone digit rule only requires one digit somewhere in the input, so
//! `"abcdefghi9"` is accepted under the default policy. Set
//! [`FormPolicy::phone_mode`] to [`PhoneMode::DigitsOnly`](crate::validators::PhoneMode)
//! for the strict check.

use std::sync::LazyLock;

pub mod evaluator;
pub mod messages;
pub mod policy;
pub mod verdict;

pub use evaluator::{AGE_RANGE, FormInput, FormValidator, parse_age};
pub use policy::{FormPolicy, PolicyError};
pub use verdict::{Field, FieldReport, FormReport, FormResult, Verdict};

static DEFAULT_VALIDATOR: LazyLock<FormValidator> = LazyLock::new(FormValidator::default);

/// Checks an email address.
pub fn validate_email(text: &str) -> Verdict {
    DEFAULT_VALIDATOR.validate_email(text)
}

/// Checks a password, reporting its highest-priority failure.
pub fn validate_password(text: &str) -> Verdict {
    DEFAULT_VALIDATOR.validate_password(text)
}

/// Checks a phone number, reporting its highest-priority failure.
pub fn validate_phone(text: &str) -> Verdict {
    DEFAULT_VALIDATOR.validate_phone(text)
}

/// True iff `value` is present and at least 18.
pub fn validate_age(value: Option<i64>) -> bool {
    DEFAULT_VALIDATOR.validate_age(value)
}

/// Evaluates all four fields and derives the accept/reject decision.
pub fn evaluate_form(email: &str, password: &str, phone: &str, age: Option<i64>) -> FormResult {
    DEFAULT_VALIDATOR.evaluate(&FormInput {
        email,
        password,
        phone,
        age,
    })
}

/// Like [`evaluate_form`], but lists every failing rule per field.
pub fn evaluate_form_detailed(
    email: &str,
    password: &str,
    phone: &str,
    age: Option<i64>,
) -> FormReport {
    DEFAULT_VALIDATOR.report(&FormInput {
        email,
        password,
        phone,
        age,
    })
}
