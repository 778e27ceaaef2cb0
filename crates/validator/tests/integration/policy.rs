//! Non-default policies.

use formcheck_validator::form::{FormInput, FormPolicy, FormValidator, PolicyError, Verdict};
use formcheck_validator::validators::PhoneMode;
use pretty_assertions::assert_eq;

#[test]
fn default_policy_values() {
    let policy = FormPolicy::default();
    assert_eq!(policy.password_min_length, 8);
    assert_eq!(policy.password_special_chars, "@#$%^&+=");
    assert_eq!(policy.phone_length, 10);
    assert_eq!(policy.phone_mode, PhoneMode::DigitPresent);
    assert_eq!(policy.min_age, 18);
}

#[test]
fn strict_phone_mode_closes_the_digit_loophole() {
    let validator = FormValidator::new(FormPolicy {
        phone_mode: PhoneMode::DigitsOnly,
        ..FormPolicy::default()
    })
    .unwrap();

    assert_eq!(
        validator.validate_phone("abcdefghi9"),
        Verdict::invalid("Must contain only digits")
    );
    assert_eq!(validator.validate_phone("1234567890"), Verdict::Valid);
}

#[test]
fn raised_age_threshold() {
    let validator = FormValidator::new(FormPolicy {
        min_age: 21,
        ..FormPolicy::default()
    })
    .unwrap();

    let result = validator.evaluate(&FormInput {
        email: "user@x.com",
        password: "Abcdefg1@",
        phone: "1234567890",
        age: Some(20),
    });
    assert!(!result.is_accepted());
    assert_eq!(
        result.failures().collect::<Vec<_>>(),
        [(formcheck_validator::form::Field::Age, "Age must be 21 or older")]
    );
}

#[test]
fn invalid_policy_is_an_error() {
    let err = FormValidator::new(FormPolicy {
        password_special_chars: "@ ".to_owned(),
        ..FormPolicy::default()
    })
    .unwrap_err();
    assert_eq!(err, PolicyError::NotSpecial(' '));
    assert_eq!(
        err.to_string(),
        "password_special_chars contains non-special character ' '"
    );
}

#[test]
fn validator_keeps_its_policy() {
    let policy = FormPolicy {
        phone_length: 11,
        ..FormPolicy::default()
    };
    let validator = FormValidator::new(policy.clone()).unwrap();
    assert_eq!(validator.policy(), &policy);
    assert_eq!(
        validator.validate_phone("1234567890"),
        Verdict::invalid("Must contain 11 digits")
    );
}
