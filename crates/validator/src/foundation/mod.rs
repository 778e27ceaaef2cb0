//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type, so a phone rule cannot be
//! applied to an age by mistake:
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let adult = min(18_i64);
//! assert!(adult.validate(&18).is_ok());
//! assert!(adult.validate(&17).is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
