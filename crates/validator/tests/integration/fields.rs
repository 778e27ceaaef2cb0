//! Single-field checks: the path a front end takes on focus loss.

use formcheck_validator::form::{
    self, Verdict, messages, validate_age, validate_email, validate_password, validate_phone,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case("user@example.com")]
#[case("user@x.com")]
#[case("john.doe+news@mail.example.co")]
fn email_accepts(#[case] input: &str) {
    assert_eq!(validate_email(input), Verdict::Valid);
}

#[rstest]
#[case("")]
#[case("user")]
#[case("user@example")]
#[case("@example.com")]
#[case("user@.com")]
#[case("user name@example.com")]
#[case("user@exa mple.com")]
fn email_rejects(#[case] input: &str) {
    assert_eq!(validate_email(input), Verdict::invalid("Invalid email address"));
}

// ============================================================================
// PASSWORD
// ============================================================================

#[rstest]
#[case("Ab1@", "Password must be at least 8 characters")]
#[case("", "Password must be at least 8 characters")]
#[case("ABCDEFG", "Password must be at least 8 characters")]
#[case("alllowercase1@", "Must contain 1 uppercase character")]
#[case("ALLUPPERCASE1@", "Must contain 1 lowercase character")]
#[case("Abcdefgh1", "Must contain 1 special character (@#$%^&+=)")]
#[case("Abcdefgh!", "Must contain 1 special character (@#$%^&+=)")]
fn password_first_failure(#[case] input: &str, #[case] message: &str) {
    assert_eq!(validate_password(input), Verdict::invalid(message));
}

#[rstest]
#[case("Abcdefg1@")]
#[case("Abcdefgh#")]
#[case("zZ$$$$$$")]
#[case("Pass=word")]
fn password_accepts(#[case] input: &str) {
    assert_eq!(validate_password(input), Verdict::Valid);
}

#[test]
fn password_length_rule_dominates() {
    // Nothing but length is wrong with the shorter inputs, yet the
    // length message is what gets reported.
    for input in ["A", "Ab", "Ab@", "Abc@", "Abcd@", "Abcde@", "Abcdef@"] {
        assert_eq!(
            validate_password(input),
            Verdict::invalid(messages::PASSWORD_TOO_SHORT),
            "input {input:?}"
        );
    }
}

// ============================================================================
// PHONE
// ============================================================================

#[rstest]
#[case("abcdefghij", "Must contain only digits")]
#[case("", "Must contain only digits")]
#[case("123456789", "Must contain 10 digits")]
#[case("12345678901", "Must contain 10 digits")]
fn phone_rejects(#[case] input: &str, #[case] message: &str) {
    assert_eq!(validate_phone(input), Verdict::invalid(message));
}

#[test]
fn phone_accepts_ten_digits() {
    assert_eq!(validate_phone("1234567890"), Verdict::Valid);
}

#[test]
fn phone_digit_rule_is_presence_only() {
    // Known looseness: one digit anywhere satisfies the digit rule.
    assert_eq!(validate_phone("abcdefghi9"), Verdict::Valid);
    assert_eq!(validate_phone("555-123-45"), Verdict::Valid);
}

// ============================================================================
// AGE
// ============================================================================

#[rstest]
#[case(None, false)]
#[case(Some(-5), false)]
#[case(Some(0), false)]
#[case(Some(17), false)]
#[case(Some(18), true)]
#[case(Some(19), true)]
#[case(Some(100), true)]
fn age_threshold(#[case] age: Option<i64>, #[case] expected: bool) {
    assert_eq!(validate_age(age), expected);
}

#[test]
fn age_from_text() {
    assert!(validate_age(form::parse_age("18")));
    assert!(!validate_age(form::parse_age("17")));
    assert!(!validate_age(form::parse_age("")));
    assert!(!validate_age(form::parse_age("abc")));
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn repeated_calls_agree() {
    for input in ["", "user@example.com", "Abcdefg1@", "123", "abcdefghi9"] {
        assert_eq!(validate_email(input), validate_email(input));
        assert_eq!(validate_password(input), validate_password(input));
        assert_eq!(validate_phone(input), validate_phone(input));
    }
}

#[test]
fn verdicts_from_many_threads_agree() {
    let expected = validate_password("alllowercase1@");
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| validate_password("alllowercase1@")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
