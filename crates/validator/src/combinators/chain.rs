//! CHAIN combinator - an ordered list of rules with two reporting modes
//!
//! `And` stops at the first failure and cannot say what else is wrong.
//! [`RuleChain`] keeps the rules as a list so the same chain can answer
//! both questions:
//!
//! - [`first_failure`](RuleChain::first_failure): the highest-priority
//!   failing rule, for single-message surfaces;
//! - [`all_failures`](RuleChain::all_failures): every failing rule, in
//!   priority order.
//!
//! The first entry of `all_failures` is always equal to `first_failure`.

use std::fmt;

use crate::foundation::{Validate, ValidationError, ValidationErrors};

type BoxedRule<I> = Box<dyn Validate<Input = I> + Send + Sync>;

/// An ordered, type-erased sequence of rules over the same input.
///
/// # Examples
///
/// ```
/// use formcheck_validator::combinators::RuleChain;
/// use formcheck_validator::validators::{has_lowercase, has_uppercase, min_length};
///
/// let chain = RuleChain::<str>::new()
///     .rule(min_length(8))
///     .rule(has_uppercase())
///     .rule(has_lowercase());
///
/// let first = chain.first_failure("abc").unwrap();
/// assert_eq!(first.code, "min_length");
///
/// let all = chain.all_failures("abc");
/// assert_eq!(all.len(), 2); // min_length, uppercase
/// ```
pub struct RuleChain<I: ?Sized> {
    rules: Vec<BoxedRule<I>>,
}

impl<I: ?Sized> RuleChain<I> {
    /// Creates an empty chain. An empty chain accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule with lower priority than every rule already present.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the error of the first failing rule, if any.
    pub fn first_failure(&self, input: &I) -> Option<ValidationError> {
        self.rules.iter().find_map(|rule| rule.validate(input).err())
    }

    /// Runs every rule and returns all failures in rule order.
    pub fn all_failures(&self, input: &I) -> ValidationErrors {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(input).err())
            .collect()
    }
}

impl<I: ?Sized> Default for RuleChain<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for RuleChain<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<I: ?Sized> Validate for RuleChain<I> {
    type Input = I;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.first_failure(input).map_or(Ok(()), Err)
    }
}
