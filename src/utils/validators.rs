//! Username and password policy validators for the registration boundary.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

/// Usernames: 3-20 characters, alphanumeric groups joined by single
/// underscores, no leading or trailing underscore. Matched after lowercasing.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap());

static UPPERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_\s]").unwrap());

const MIN_PASSWORD_LENGTH: usize = 8;

fn policy_error(message: &'static str) -> ValidationError {
    ValidationError::new("policy").with_message(Cow::Borrowed(message))
}

/// Validates a username against the account naming policy.
///
/// Usernames are case-insensitive; callers store the lowercased form.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let lowered = username.to_lowercase();

    if !(3..=20).contains(&lowered.chars().count()) {
        return Err(policy_error("Username must be 3-20 characters long"));
    }

    if !USERNAME_REGEX.is_match(&lowered) {
        return Err(policy_error(
            "Username may contain only letters, numbers, and single underscores, \
             and must not start or end with an underscore",
        ));
    }

    Ok(())
}

/// Validates a password against the strength policy.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(policy_error("Password cannot be empty"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(policy_error("Password must be at least 8 characters long"));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(policy_error("Password cannot be entirely numeric"));
    }

    if !UPPERCASE_REGEX.is_match(password) {
        return Err(policy_error("Password must contain at least one uppercase letter"));
    }

    if !LOWERCASE_REGEX.is_match(password) {
        return Err(policy_error("Password must contain at least one lowercase letter"));
    }

    if !DIGIT_REGEX.is_match(password) {
        return Err(policy_error("Password must contain at least one number"));
    }

    if !SPECIAL_CHAR_REGEX.is_match(password) {
        return Err(policy_error("Password must contain at least one special character"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["alice", "bob_99", "a_b_c", "User123", "abc"] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_usernames() {
        for name in [
            "ab",              // too short
            "_alice",          // leading underscore
            "alice_",          // trailing underscore
            "al__ice",         // doubled underscore
            "alice!",          // symbol
            "name with space",
            "abcdefghijklmnopqrstu", // 21 chars
        ] {
            assert!(validate_username(name).is_err(), "{name} should be invalid");
        }
    }

    #[test]
    fn test_valid_passwords() {
        for pw in ["Sup3r$ecret!", "Aa1!aaaa", "pa55W0rd#xyz"] {
            assert!(validate_password(pw).is_ok(), "{pw} should be valid");
        }
    }

    #[test]
    fn test_invalid_passwords() {
        for pw in [
            "",
            "Aa1!x",        // too short
            "12345678",     // numeric only
            "alllower1!",   // no uppercase
            "ALLUPPER1!",   // no lowercase
            "NoDigits!!",   // no digit
            "NoSpecial99",  // no special char
        ] {
            assert!(validate_password(pw).is_err(), "{pw} should be invalid");
        }
    }
}
