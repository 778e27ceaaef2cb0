//! Result values handed to the front end.
//!
//! Nothing here is mutable after construction, and the acceptance flag is
//! always computed from the field verdicts, never stored.

use std::fmt;

use crate::foundation::{ValidationError, ValidationErrors};

// ============================================================================
// FIELD
// ============================================================================

/// The four form fields, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    Email,
    Password,
    Phone,
    Age,
}

impl Field {
    /// All fields in presentation order.
    pub const ALL: [Field; 4] = [Field::Email, Field::Password, Field::Phone, Field::Age];

    /// Machine name, e.g. `"email"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "phone",
            Field::Age => "age",
        }
    }

    /// Human label, e.g. `"Email"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Phone => "Phone",
            Field::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Validity of one field: valid, or invalid with a message.
///
/// The message of an `Invalid` verdict produced by this crate is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", content = "message", rename_all = "snake_case")
)]
pub enum Verdict {
    Valid,
    Invalid(String),
}

impl Verdict {
    /// Creates an invalid verdict.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Returns true for `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The diagnostic message, present iff invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error.message.into_owned()),
        }
    }
}

impl From<Option<ValidationError>> for Verdict {
    fn from(error: Option<ValidationError>) -> Self {
        error.map_or(Self::Valid, |e| Self::Invalid(e.message.into_owned()))
    }
}

// ============================================================================
// FIELD REPORT
// ============================================================================

/// Every failing rule of one field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldReport {
    pub(crate) field: Field,
    pub(crate) failures: ValidationErrors,
}

impl FieldReport {
    pub(crate) fn new(field: Field, failures: ValidationErrors) -> Self {
        let failures = failures
            .into_iter()
            .map(|e| e.with_field(field.as_str()))
            .collect();
        Self { field, failures }
    }

    /// The field this report describes.
    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The highest-priority failure: what a single-message surface shows.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.failures.first()
    }

    /// All failures in priority order.
    #[must_use]
    pub fn failures(&self) -> &ValidationErrors {
        &self.failures
    }

    /// Failure messages in priority order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.messages()
    }

    /// Collapses to the first-failure verdict.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.first()
            .map_or(Verdict::Valid, |e| Verdict::invalid(e.message.as_ref()))
    }
}

// ============================================================================
// FORM RESULT
// ============================================================================

/// Outcome of evaluating the whole form with first-failure verdicts.
///
/// Only the evaluator constructs this, so [`is_accepted`](Self::is_accepted)
/// cannot disagree with the constituent checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    pub(crate) email: Verdict,
    pub(crate) password: Verdict,
    pub(crate) phone: Verdict,
    pub(crate) age_valid: bool,
    pub(crate) age_message: String,
}

impl FormResult {
    /// Email verdict.
    #[must_use]
    pub fn email(&self) -> &Verdict {
        &self.email
    }

    /// Password verdict.
    #[must_use]
    pub fn password(&self) -> &Verdict {
        &self.password
    }

    /// Phone verdict.
    #[must_use]
    pub fn phone(&self) -> &Verdict {
        &self.phone
    }

    /// Age check outcome.
    #[must_use]
    pub fn age_valid(&self) -> bool {
        self.age_valid
    }

    /// True iff email, password and phone are valid and the age check passes.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.email.is_valid() && self.password.is_valid() && self.phone.is_valid() && self.age_valid
    }

    /// Failing fields with their message, in field order.
    ///
    /// The age entry carries the fixed age message since the age check
    /// itself has none.
    pub fn failures(&self) -> impl Iterator<Item = (Field, &str)> {
        let texts = [
            (Field::Email, self.email.message()),
            (Field::Password, self.password.message()),
            (Field::Phone, self.phone.message()),
        ];
        let age = (!self.age_valid).then_some((Field::Age, self.age_message.as_str()));

        texts
            .into_iter()
            .filter_map(|(field, message)| message.map(|m| (field, m)))
            .chain(age)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FormResult", 5)?;
        state.serialize_field("accepted", &self.is_accepted())?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", &self.password)?;
        state.serialize_field("phone", &self.phone)?;
        state.serialize_field("age", &self.age_valid)?;
        state.end()
    }
}

// ============================================================================
// FORM REPORT
// ============================================================================

/// Outcome of evaluating the whole form with every failing rule listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub(crate) email: FieldReport,
    pub(crate) password: FieldReport,
    pub(crate) phone: FieldReport,
    pub(crate) age: FieldReport,
    pub(crate) age_message: String,
}

impl FormReport {
    /// Report for one field.
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldReport {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
        }
    }

    /// All four reports in field order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldReport> {
        [&self.email, &self.password, &self.phone, &self.age].into_iter()
    }

    /// True iff no field has a failure.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.fields().all(FieldReport::is_valid)
    }

    /// Collapses to first-failure verdicts.
    #[must_use]
    pub fn to_result(&self) -> FormResult {
        FormResult {
            email: self.email.verdict(),
            password: self.password.verdict(),
            phone: self.phone.verdict(),
            age_valid: self.age.is_valid(),
            age_message: self.age_message.clone(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FormReport", 5)?;
        state.serialize_field("accepted", &self.is_accepted())?;
        state.serialize_field("email", &self.email.failures)?;
        state.serialize_field("password", &self.password.failures)?;
        state.serialize_field("phone", &self.phone.failures)?;
        state.serialize_field("age", &self.age.failures)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(email: Verdict, password: Verdict, phone: Verdict, age_valid: bool) -> FormResult {
        FormResult {
            email,
            password,
            phone,
            age_valid,
            age_message: "Age must be 18 or older".to_owned(),
        }
    }

    #[test]
    fn test_verdict_message_iff_invalid() {
        assert_eq!(Verdict::Valid.message(), None);
        assert_eq!(Verdict::invalid("bad").message(), Some("bad"));
        assert!(Verdict::Valid.is_valid());
        assert!(!Verdict::invalid("bad").is_valid());
    }

    #[test]
    fn test_verdict_from_result() {
        assert_eq!(Verdict::from(Ok::<(), ValidationError>(())), Verdict::Valid);
        let err = ValidationError::new("x", "Must contain 10 digits");
        assert_eq!(Verdict::from(Err(err)), Verdict::invalid("Must contain 10 digits"));
    }

    #[test]
    fn test_accepted_is_conjunction() {
        let ok = result(Verdict::Valid, Verdict::Valid, Verdict::Valid, true);
        assert!(ok.is_accepted());
        assert_eq!(ok.failures().count(), 0);

        let young = result(Verdict::Valid, Verdict::Valid, Verdict::Valid, false);
        assert!(!young.is_accepted());

        let bad_phone = result(Verdict::Valid, Verdict::Valid, Verdict::invalid("p"), true);
        assert!(!bad_phone.is_accepted());
    }

    #[test]
    fn test_failures_in_field_order() {
        let form = result(
            Verdict::invalid("Invalid email address"),
            Verdict::Valid,
            Verdict::invalid("Must contain 10 digits"),
            false,
        );
        let failures: Vec<_> = form.failures().collect();
        assert_eq!(
            failures,
            [
                (Field::Email, "Invalid email address"),
                (Field::Phone, "Must contain 10 digits"),
                (Field::Age, "Age must be 18 or older"),
            ]
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Email.as_str(), "email");
        assert_eq!(Field::Age.to_string(), "Age");
        assert_eq!(Field::ALL.len(), 4);
    }
}
