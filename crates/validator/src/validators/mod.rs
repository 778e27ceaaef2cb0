//! Built-in validators
//!
//! - **Length**: [`MinLength`], [`ExactLength`]
//! - **Character classes**: [`HasUppercase`], [`HasLowercase`], [`HasDigit`],
//!   [`ContainsAnyOf`]
//! - **Formats**: [`Email`], [`Phone`]
//! - **Numeric**: [`Min`]
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let password = min_length(8).and(has_uppercase()).and(has_lowercase());
//! assert!(password.validate("Abcdefgh").is_ok());
//!
//! let age = min(18_i64);
//! assert!(age.validate(&21).is_ok());
//! ```

pub mod content;
pub mod length;
pub mod pattern;
pub mod phone;
pub mod range;

pub use content::{Email, email};
pub use length::{ExactLength, MinLength, exact_length, min_length};
pub use pattern::{
    ContainsAnyOf, HasDigit, HasLowercase, HasUppercase, contains_any_of, has_digit,
    has_lowercase, has_uppercase,
};
pub use phone::{Phone, PhoneDigits, PhoneLength, PhoneMode};
pub use range::{Min, min};
