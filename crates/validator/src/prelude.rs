//! Prelude module for convenient imports.
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let password = min_length(8).and(has_uppercase()).and(contains_any_of("@#"));
//! assert!(password.validate("Abcdefg@").is_ok());
//! assert_eq!(validate_email("nope"), Verdict::invalid("Invalid email address"));
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

pub use crate::validators::*;

pub use crate::combinators::{And, RuleChain, WithMessage, and, with_message};

pub use crate::form::{
    Field, FieldReport, FormInput, FormPolicy, FormReport, FormResult, FormValidator, Verdict,
    evaluate_form, evaluate_form_detailed, parse_age, validate_age, validate_email,
    validate_password, validate_phone,
};
