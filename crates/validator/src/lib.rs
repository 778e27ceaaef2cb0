//! # formcheck-validator
//!
//! Validation rules for a sign-up form and the accept/reject decision built
//! on them.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::form::{self, Verdict};
//!
//! assert_eq!(form::validate_email("user@example.com"), Verdict::Valid);
//! assert_eq!(
//!     form::validate_phone("123456789"),
//!     Verdict::invalid("Must contain 10 digits"),
//! );
//!
//! let result = form::evaluate_form("user@x.com", "Abcdefg1@", "1234567890", Some(20));
//! assert!(result.is_accepted());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`]: generic rules (length, character classes, email, phone, minimum)
//! - [`combinators`]: `and`, message overrides, ordered rule chains
//! - [`form`]: the field rules with their fixed messages, and form evaluation
//!
//! Every rule is a pure function of its input. Nothing here performs I/O or
//! keeps state between calls; invalid input is always a return value, never
//! an error or a panic.

pub mod combinators;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
