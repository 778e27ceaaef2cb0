//! The fixed diagnostic catalog for the default policy.

pub const EMAIL_INVALID: &str = "Invalid email address";

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NO_UPPERCASE: &str = "Must contain 1 uppercase character";
pub const PASSWORD_NO_LOWERCASE: &str = "Must contain 1 lowercase character";
pub const PASSWORD_NO_SPECIAL: &str = "Must contain 1 special character (@#$%^&+=)";

// Shown when the digit check fails, even in the default presence-only mode.
pub const PHONE_NOT_DIGITS: &str = "Must contain only digits";
pub const PHONE_WRONG_LENGTH: &str = "Must contain 10 digits";

/// The age check has no verdict of its own; front ends show this when it fails.
pub const AGE_TOO_YOUNG: &str = "Age must be 18 or older";
