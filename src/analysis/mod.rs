// src/analysis/mod.rs
use crate::generators::charset::is_special;
use crate::models::StrengthResult;

/// Minimum length, in UTF-16 code units, for the length rule.
pub const MIN_LENGTH: usize = 8;

// Analyze password strength against the five rules
pub fn evaluate(password: &str) -> StrengthResult {
    let has_min_length = password.encode_utf16().nth(MIN_LENGTH - 1).is_some();

    let mut has_uppercase = false;
    let mut has_lowercase = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        has_uppercase |= c.is_ascii_uppercase();
        has_lowercase |= c.is_ascii_lowercase();
        has_digit |= c.is_ascii_digit();
        has_special |= is_special(c);
    }

    StrengthResult::new(has_min_length, has_uppercase, has_lowercase, has_digit, has_special)
}
