//! Pure per-field validation predicates.

use lazy_static::lazy_static;
use regex::Regex;

use super::FieldKind;

/// Digit bounds for a non-empty phone value, counted after stripping
/// separators.
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

lazy_static! {
    /// Simple `local@domain.tld` shape: no whitespace, one `@`, at
    /// least one `.` after it.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");

    /// Characters a phone value may consist of.
    static ref PHONE_ALLOWED_REGEX: Regex =
        Regex::new(r"^[0-9+\s\-().]+$").expect("Invalid regex pattern");
}

/// Validates a raw field value against the rule for its kind.
///
/// Unknown kinds always pass: no rule found means no constraint.
pub fn validate(kind: FieldKind, raw: &str) -> bool {
    let value = raw.trim();
    match kind {
        FieldKind::FullName => value.chars().count() >= 3,
        FieldKind::Company => value.chars().count() >= 2,
        FieldKind::Email => EMAIL_REGEX.is_match(value),
        FieldKind::Phone => validate_phone(value),
        FieldKind::Message => value.chars().count() >= 10,
        FieldKind::Package => !value.is_empty(),
        FieldKind::Unknown => true,
    }
}

/// Phone is optional. A non-empty value must consist of digits and the
/// separators `space - ( ) + .`, and carry 7 to 15 digits total.
fn validate_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if !PHONE_ALLOWED_REGEX.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
