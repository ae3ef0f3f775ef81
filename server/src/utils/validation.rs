//! Input validation helpers
//!
//! Centralized format checks for the employee create pipeline. The exact
//! messages matter: clients display them verbatim, and the checks run in a
//! fixed order so a given bad payload always yields the same error.

use chrono::NaiveDate;

/// Email format accepted by the directory: no whitespace, a non-empty
/// local part, and a domain containing at least one interior dot.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &value[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone numbers are stored as text and must be exactly 10 digits.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a date of birth submitted as `YYYY-MM-DD`.
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jane@ex.com"));
        assert!(is_valid_email("j.doe+hr@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@ex"));
        assert!(!is_valid_email("@ex.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane doe@ex.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_must_be_ten_digits() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone("98765abc10"));
        assert!(!is_valid_phone("987 654 32"));
    }

    #[test]
    fn date_of_birth_is_strict_iso() {
        assert_eq!(
            parse_date_of_birth("1990-01-01"),
            NaiveDate::from_ymd_opt(1990, 1, 1)
        );
        assert!(parse_date_of_birth("01/01/1990").is_none());
        assert!(parse_date_of_birth("1990-13-01").is_none());
        assert!(parse_date_of_birth("yesterday").is_none());
    }
}
