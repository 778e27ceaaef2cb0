//! Combinators for composing validators
//!
//! - [`And`]: both must pass, first failure wins
//! - [`WithMessage`]: replace the user-facing message
//! - [`RuleChain`]: ordered rule list reporting the first or all failures

pub mod and;
pub mod chain;
pub mod message;

pub use and::{And, and};
pub use chain::RuleChain;
pub use message::{WithMessage, with_message};
