//! Field rules and form evaluation built from a [`FormPolicy`].

use std::ops::RangeInclusive;

use crate::combinators::{RuleChain, WithMessage};
use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
use crate::validators::{
    Min, Phone, contains_any_of, email, has_lowercase, has_uppercase, min, min_length,
};

use super::messages;
use super::policy::{FormPolicy, PolicyError};
use super::verdict::{Field, FieldReport, FormReport, FormResult, Verdict};

/// Range of the age slider on the sign-up form. Front ends use it to bound
/// input; [`FormValidator::validate_age`] does not clamp.
pub const AGE_RANGE: RangeInclusive<i64> = 1..=100;

/// Parses an age entered as text. Surrounding whitespace is ignored;
/// anything that is not an integer is treated as absent.
///
/// ```
/// use formcheck_validator::form::parse_age;
///
/// assert_eq!(parse_age("18"), Some(18));
/// assert_eq!(parse_age(" 42 "), Some(42));
/// assert_eq!(parse_age("eighteen"), None);
/// assert_eq!(parse_age(""), None);
/// ```
#[must_use]
pub fn parse_age(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// The raw values of one form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub phone: &'a str,
    pub age: Option<i64>,
}

/// Evaluates form fields against a policy.
///
/// Rule chains are built once in [`new`](Self::new); every method after
/// that is a pure function of its arguments, so one validator can be shared
/// across threads.
///
/// ```
/// use formcheck_validator::form::{FormInput, FormValidator, Verdict};
///
/// let validator = FormValidator::default();
/// assert_eq!(validator.validate_phone("1234567890"), Verdict::Valid);
///
/// let result = validator.evaluate(&FormInput {
///     email: "user@x.com",
///     password: "Abcdefg1@",
///     phone: "1234567890",
///     age: Some(20),
/// });
/// assert!(result.is_accepted());
/// ```
#[derive(Debug)]
pub struct FormValidator {
    policy: FormPolicy,
    email: RuleChain<str>,
    password: RuleChain<str>,
    phone: RuleChain<str>,
    age: WithMessage<Min<i64>>,
}

impl FormValidator {
    /// Builds a validator, rejecting unusable policies.
    pub fn new(policy: FormPolicy) -> Result<Self, PolicyError> {
        policy.check()?;
        Ok(Self::build(policy))
    }

    fn build(policy: FormPolicy) -> Self {
        let email = RuleChain::new().rule(
            email()
                .with_message(messages::EMAIL_INVALID)
                .with_code("email"),
        );

        let password = RuleChain::new()
            .rule(
                min_length(policy.password_min_length)
                    .with_message(policy.password_length_message()),
            )
            .rule(has_uppercase().with_message(messages::PASSWORD_NO_UPPERCASE))
            .rule(has_lowercase().with_message(messages::PASSWORD_NO_LOWERCASE))
            .rule(
                contains_any_of(policy.password_special_chars.as_str())
                    .with_message(policy.password_special_message())
                    .with_code("special"),
            );

        let (digits, length) = Phone::new(policy.phone_length)
            .mode(policy.phone_mode)
            .into_rules();
        let phone = RuleChain::new()
            .rule(digits.with_message(messages::PHONE_NOT_DIGITS))
            .rule(length.with_message(policy.phone_length_message()));

        let age = min(policy.min_age).with_message(policy.age_message());

        Self {
            policy,
            email,
            password,
            phone,
            age,
        }
    }

    /// The policy this validator was built from.
    #[must_use]
    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Checks an email address.
    pub fn validate_email(&self, text: &str) -> Verdict {
        first_verdict(Field::Email, &self.email, text)
    }

    /// Checks a password, reporting only its highest-priority failure.
    pub fn validate_password(&self, text: &str) -> Verdict {
        first_verdict(Field::Password, &self.password, text)
    }

    /// Checks a phone number, reporting only its highest-priority failure.
    pub fn validate_phone(&self, text: &str) -> Verdict {
        first_verdict(Field::Phone, &self.phone, text)
    }

    /// True iff an age is present and at least the policy minimum.
    pub fn validate_age(&self, value: Option<i64>) -> bool {
        let valid = value.is_some_and(|v| self.age.validate(&v).is_ok());
        tracing::trace!(field = "age", present = value.is_some(), valid, "field checked");
        valid
    }

    /// Every failing email rule.
    pub fn report_email(&self, text: &str) -> FieldReport {
        FieldReport::new(Field::Email, self.email.all_failures(text))
    }

    /// Every failing password rule, in priority order.
    pub fn report_password(&self, text: &str) -> FieldReport {
        FieldReport::new(Field::Password, self.password.all_failures(text))
    }

    /// Every failing phone rule, in priority order.
    pub fn report_phone(&self, text: &str) -> FieldReport {
        FieldReport::new(Field::Phone, self.phone.all_failures(text))
    }

    /// The age check as a report; an absent age fails with the age message.
    pub fn report_age(&self, value: Option<i64>) -> FieldReport {
        let failures = match value {
            Some(v) => self.age.validate(&v).err(),
            None => Some(
                ValidationError::new("required", self.policy.age_message())
                    .with_param("min", self.policy.min_age.to_string()),
            ),
        };
        FieldReport::new(Field::Age, failures.into_iter().collect::<ValidationErrors>())
    }

    /// Evaluates all four fields with first-failure verdicts.
    pub fn evaluate(&self, input: &FormInput<'_>) -> FormResult {
        let result = FormResult {
            email: self.validate_email(input.email),
            password: self.validate_password(input.password),
            phone: self.validate_phone(input.phone),
            age_valid: self.validate_age(input.age),
            age_message: self.policy.age_message(),
        };
        tracing::debug!(
            accepted = result.is_accepted(),
            failed = result.failures().count(),
            "form evaluated"
        );
        result
    }

    /// Evaluates all four fields listing every failing rule.
    pub fn report(&self, input: &FormInput<'_>) -> FormReport {
        let report = FormReport {
            email: self.report_email(input.email),
            password: self.report_password(input.password),
            phone: self.report_phone(input.phone),
            age: self.report_age(input.age),
            age_message: self.policy.age_message(),
        };
        tracing::debug!(
            accepted = report.is_accepted(),
            failures = report.fields().map(|f| f.failures().len()).sum::<usize>(),
            "form report built"
        );
        report
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::build(FormPolicy::default())
    }
}

fn first_verdict(field: Field, chain: &RuleChain<str>, text: &str) -> Verdict {
    let failure = chain.first_failure(text);
    // Rule codes only: the raw input may be a password.
    tracing::trace!(
        field = field.as_str(),
        rule = failure.as_ref().map(|e| e.code.as_ref()),
        "field checked"
    );
    Verdict::from(failure)
}
