//! Field rules for the login form and the suspicious-content guard.
//!
//! The `check_*` functions are the rules proper and return the first
//! [`LoginError`] found; the `validate_*` wrappers project that onto the
//! [`ValidationResult`] the error regions render.

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

use crate::login::types::{FieldKind, ValidationResult};
use crate::services::errors::{LoginError, LoginResult, Weakness};

pub const EMAIL_MAX_LEN: usize = 254;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

/// Literal passwords rejected regardless of length, compared case-insensitively
pub const WEAK_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid email pattern")
});

// Script injection, inline handlers, SQL verbs and dynamic evaluation
static SUSPICIOUS_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)on(?-u:\w)+\s*=",
        r"(?i)union\s+select",
        r"(?i)drop\s+table",
        r"(?i)insert\s+into",
        r"(?i)delete\s+from",
        r"(?i)update\s+set",
        r"(?i)exec\s*\(",
        r"(?i)eval\s*\(",
    ])
    .expect("Invalid suspicious content pattern")
});

/// Length in UTF-16 code units, the unit browsers use for `maxlength`
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn check_email(value: &str) -> LoginResult<()> {
    let field = FieldKind::Email;
    let email = value.trim();

    if email.is_empty() {
        return Err(LoginError::FieldEmpty { field });
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(LoginError::FieldInvalidFormat { field });
    }

    if text_len(email) > EMAIL_MAX_LEN {
        return Err(LoginError::FieldTooLong {
            field,
            max: EMAIL_MAX_LEN,
        });
    }

    if email.contains("..") || email.starts_with('.') || email.ends_with('.') {
        return Err(LoginError::FieldInvalidFormat { field });
    }

    Ok(())
}

pub fn check_password(value: &str) -> LoginResult<()> {
    let field = FieldKind::Password;
    let password = value.trim();

    if password.is_empty() {
        return Err(LoginError::FieldEmpty { field });
    }

    let len = text_len(password);
    if len < PASSWORD_MIN_LEN {
        return Err(LoginError::FieldTooShort {
            field,
            min: PASSWORD_MIN_LEN,
        });
    }

    if len > PASSWORD_MAX_LEN {
        return Err(LoginError::FieldTooLong {
            field,
            max: PASSWORD_MAX_LEN,
        });
    }

    let lowered = password.to_lowercase();
    if WEAK_PASSWORDS.contains(&lowered.as_str()) {
        return Err(LoginError::FieldWeak(Weakness::CommonPassword));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(LoginError::FieldWeak(Weakness::DigitsOnly));
    }

    Ok(())
}

pub fn validate_email(value: &str) -> ValidationResult {
    check_email(value).into()
}

pub fn validate_password(value: &str) -> ValidationResult {
    check_password(value).into()
}

/// Whether the value looks like an injection payload.
///
/// A coarse heuristic run before the login request; it does not replace
/// validation on a real server.
pub fn contains_suspicious_content(value: &str) -> bool {
    SUSPICIOUS_PATTERNS.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_required() {
        let result = validate_email("");
        assert!(!result.valid);
        assert_eq!(
            result.message.as_deref(),
            Some("Please enter your email address")
        );
        assert!(!validate_email("   ").valid);
    }

    #[test]
    fn test_email_shapes() {
        assert!(!validate_email("a@b").valid);
        assert!(validate_email("a@b.com").valid);
        assert!(validate_email("  first.last+tag@mail.example.org ").valid);
        assert!(!validate_email("no-at-sign.com").valid);
        assert!(!validate_email("a@b.c").valid);
    }

    #[test]
    fn test_email_dot_rules() {
        assert_eq!(
            check_email("a..b@example.com"),
            Err(LoginError::FieldInvalidFormat {
                field: FieldKind::Email
            })
        );
        assert!(check_email(".ab@example.com").is_err());
        assert!(check_email("ab@example..com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            check_email(&email),
            Err(LoginError::FieldTooLong {
                field: FieldKind::Email,
                max: EMAIL_MAX_LEN
            })
        );
    }

    #[test]
    fn test_password_rules() {
        let short = validate_password("short1");
        assert!(!short.valid);
        assert_eq!(
            short.message.as_deref(),
            Some("Password must be at least 8 characters")
        );

        assert_eq!(
            check_password("12345678"),
            Err(LoginError::FieldWeak(Weakness::CommonPassword))
        );
        assert_eq!(
            check_password("PassWord123"),
            Err(LoginError::FieldWeak(Weakness::CommonPassword))
        );
        assert_eq!(
            check_password("987654321"),
            Err(LoginError::FieldWeak(Weakness::DigitsOnly))
        );
        assert!(matches!(
            check_password(&"x".repeat(129)),
            Err(LoginError::FieldTooLong { .. })
        ));
        assert!(validate_password("Abc12345").valid);
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // Each emoji is a surrogate pair, so four of them reach the minimum
        assert!(validate_password("😀😀😀😀").valid);
        assert!(matches!(
            check_password("😀😀😀"),
            Err(LoginError::FieldTooShort { .. })
        ));
        assert_eq!(text_len("é😀"), 3);
    }

    #[test]
    fn test_empty_password_is_required() {
        assert_eq!(
            validate_password("").message.as_deref(),
            Some("Please enter your password")
        );
    }

    #[test]
    fn test_suspicious_content() {
        assert!(contains_suspicious_content("<script>alert(1)</script>"));
        assert!(contains_suspicious_content("JavaScript:void(0)"));
        assert!(contains_suspicious_content("x\" onerror = \"y"));
        assert!(contains_suspicious_content("1 UNION  SELECT *"));
        assert!(contains_suspicious_content("eval (payload)"));
        assert!(!contains_suspicious_content("user@example.com"));
        assert!(!contains_suspicious_content("Abc12345"));
        // Handler names are ASCII word characters only
        assert!(contains_suspicious_content("onclick=1"));
        assert!(!contains_suspicious_content("onü=1"));
    }
}
