//! Aggregate evaluation: the submit path.

use formcheck_validator::form::{Field, FormInput, FormValidator, Verdict, evaluate_form};
use pretty_assertions::assert_eq;
use rstest::rstest;

const EMAIL: &str = "user@x.com";
const PASSWORD: &str = "Abcdefg1@";
const PHONE: &str = "1234567890";
const AGE: Option<i64> = Some(20);

#[test]
fn all_valid_is_accepted() {
    let result = evaluate_form(EMAIL, PASSWORD, PHONE, AGE);
    assert!(result.is_accepted());
    assert_eq!(result.email(), &Verdict::Valid);
    assert_eq!(result.password(), &Verdict::Valid);
    assert_eq!(result.phone(), &Verdict::Valid);
    assert!(result.age_valid());
    assert_eq!(result.failures().count(), 0);
}

#[test]
fn invalid_email_alone_rejects() {
    let result = evaluate_form("not-an-email", PASSWORD, PHONE, AGE);
    assert!(!result.is_accepted());
    assert_eq!(result.email(), &Verdict::invalid("Invalid email address"));
    assert_eq!(result.password(), &Verdict::Valid);
    assert_eq!(result.phone(), &Verdict::Valid);
    assert!(result.age_valid());
}

#[test]
fn invalid_password_alone_rejects() {
    let result = evaluate_form(EMAIL, "ALLUPPERCASE1@", PHONE, AGE);
    assert!(!result.is_accepted());
    assert_eq!(result.email(), &Verdict::Valid);
    assert_eq!(
        result.password(),
        &Verdict::invalid("Must contain 1 lowercase character")
    );
    assert_eq!(result.phone(), &Verdict::Valid);
}

#[test]
fn invalid_phone_alone_rejects() {
    let result = evaluate_form(EMAIL, PASSWORD, "123456789", AGE);
    assert!(!result.is_accepted());
    assert_eq!(result.phone(), &Verdict::invalid("Must contain 10 digits"));
    assert_eq!(
        result.failures().collect::<Vec<_>>(),
        [(Field::Phone, "Must contain 10 digits")]
    );
}

#[rstest]
#[case(Some(17))]
#[case(None)]
fn failing_age_alone_rejects(#[case] age: Option<i64>) {
    let result = evaluate_form(EMAIL, PASSWORD, PHONE, age);
    assert!(!result.is_accepted());
    assert!(!result.age_valid());
    assert_eq!(result.email(), &Verdict::Valid);
    assert_eq!(result.password(), &Verdict::Valid);
    assert_eq!(result.phone(), &Verdict::Valid);
    assert_eq!(
        result.failures().collect::<Vec<_>>(),
        [(Field::Age, "Age must be 18 or older")]
    );
}

#[test]
fn every_failure_listed_in_field_order() {
    let result = evaluate_form("", "", "", None);
    let fields: Vec<Field> = result.failures().map(|(field, _)| field).collect();
    assert_eq!(fields, Field::ALL);
}

#[test]
fn validator_instance_matches_free_function() {
    let validator = FormValidator::default();
    let input = FormInput {
        email: "a@b.cd",
        password: "abc",
        phone: "abcdefghi9",
        age: Some(18),
    };
    assert_eq!(
        validator.evaluate(&input),
        evaluate_form(input.email, input.password, input.phone, input.age)
    );
}

#[test]
fn evaluation_is_repeatable() {
    let first = evaluate_form(EMAIL, "short", PHONE, Some(30));
    let second = evaluate_form(EMAIL, "short", PHONE, Some(30));
    assert_eq!(first, second);
}
