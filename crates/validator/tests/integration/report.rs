//! Detailed reports: every failing rule, not just the first.

use formcheck_validator::form::{
    Field, FormInput, FormValidator, Verdict, evaluate_form, evaluate_form_detailed,
    validate_password,
};
use pretty_assertions::assert_eq;

fn codes(report: &formcheck_validator::form::FieldReport) -> Vec<&str> {
    report
        .failures()
        .errors()
        .iter()
        .map(|e| e.code.as_ref())
        .collect()
}

#[test]
fn password_report_lists_failures_in_priority_order() {
    let report = FormValidator::default().report_password("ab");
    assert_eq!(codes(&report), ["min_length", "uppercase", "special"]);
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        [
            "Password must be at least 8 characters",
            "Must contain 1 uppercase character",
            "Must contain 1 special character (@#$%^&+=)",
        ]
    );
}

#[test]
fn first_failure_is_the_single_verdict() {
    let validator = FormValidator::default();
    for input in ["", "ab", "abcdefgh", "ABCDEFGH", "Abcdefgh", "Abcdefg1@"] {
        assert_eq!(
            validator.report_password(input).verdict(),
            validate_password(input),
            "input {input:?}"
        );
    }
}

#[test]
fn phone_report_can_carry_both_rules() {
    let report = FormValidator::default().report_phone("abc");
    assert_eq!(codes(&report), ["phone_digits", "phone_length"]);
    assert_eq!(report.verdict(), Verdict::invalid("Must contain only digits"));
}

#[test]
fn failures_are_tagged_with_their_field() {
    let report = evaluate_form_detailed("x", "x", "x", None);
    for field in Field::ALL {
        let field_report = report.field(field);
        assert_eq!(field_report.field(), field);
        assert!(!field_report.is_valid());
        assert!(
            field_report
                .failures()
                .errors()
                .iter()
                .all(|e| e.field.as_deref() == Some(field.as_str()))
        );
    }
}

#[test]
fn young_age_reports_min_rule() {
    let report = FormValidator::default().report_age(Some(17));
    assert_eq!(codes(&report), ["min"]);
    assert_eq!(report.messages().collect::<Vec<_>>(), ["Age must be 18 or older"]);
    assert!(FormValidator::default().report_age(Some(18)).is_valid());
}

#[test]
fn report_collapses_to_first_failure_result() {
    let inputs = [
        FormInput {
            email: "user@x.com",
            password: "Abcdefg1@",
            phone: "1234567890",
            age: Some(18),
        },
        FormInput {
            email: "user@",
            password: "abcdefgh",
            phone: "12345",
            age: Some(3),
        },
        FormInput::default(),
    ];
    for input in inputs {
        let report = evaluate_form_detailed(input.email, input.password, input.phone, input.age);
        let result = evaluate_form(input.email, input.password, input.phone, input.age);
        assert_eq!(report.is_accepted(), result.is_accepted());
        assert_eq!(report.to_result(), result);
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_with_acceptance_flag() {
    let result = evaluate_form("user@x.com", "Abcdefg1@", "123", Some(20));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "accepted": false,
            "email": { "status": "valid" },
            "password": { "status": "valid" },
            "phone": { "status": "invalid", "message": "Must contain 10 digits" },
            "age": true,
        })
    );
}
