use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Exact message contracts. Consumers render these verbatim, so any change
/// here is a breaking change for the forms that display them.
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 4 characters long.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const PASSWORD_NO_SPECIAL: &str = "Password must include at least one special character.";

const USERNAME_MIN_CHARS: usize = 4;
const PASSWORD_MIN_CHARS: usize = 8;

/// The characters accepted as "special" by the registration password rule.
const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

// Local and domain parts accept anything but a space; the top-level segment
// is restricted to 2-3 lowercase letters. ".com" passes, ".info" and ".IO"
// do not. This is a known limitation of the pattern and is kept as is.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^ ]+@[^ ]+\.[a-z]{2,3}$")
        .expect("Failed to compile email regex")
});

/// The outcome of one rule applied to one field value.
///
/// `Invalid` carries the fixed, rule-specific message. There is no other
/// failure mode: every rule accepts any string, including the empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The message to render, empty for a valid value.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationResult::Valid => "",
            ValidationResult::Invalid(message) => message,
        }
    }

    /// Converts the result into the form wrapper types consume.
    pub fn into_result(self) -> Result<(), InvalidField> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(message) => Err(InvalidField(message)),
        }
    }

    fn check(ok: bool, message: &'static str) -> Self {
        if ok {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(message)
        }
    }
}

/// Error produced when a wrapper type rejects its input.
/// Carries the same message the rule would have rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub struct InvalidField(pub &'static str);

/// Checks that a username is at least 4 characters long.
/// The same rule applies to registration and login usernames.
pub fn validate_username(username: &str) -> ValidationResult {
    ValidationResult::check(
        username.chars().count() >= USERNAME_MIN_CHARS,
        USERNAME_TOO_SHORT,
    )
}

/// Checks an email address against the basic pattern
/// `^[^ ]+@[^ ]+\.[a-z]{2,3}$`.
pub fn validate_email(email: &str) -> ValidationResult {
    ValidationResult::check(EMAIL_REGEX.is_match(email), EMAIL_INVALID)
}

/// Checks a registration password: at least 8 characters, then at least one
/// special character. The first failing condition wins, so a single call
/// never produces more than one message.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return ValidationResult::Invalid(PASSWORD_TOO_SHORT);
    }
    ValidationResult::check(
        password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
        PASSWORD_NO_SPECIAL,
    )
}

/// Checks a login password: length only. Login deliberately does not require
/// a special character, so this must stay separate from [`validate_password`].
pub fn validate_login_password(password: &str) -> ValidationResult {
    ValidationResult::check(
        password.chars().count() >= PASSWORD_MIN_CHARS,
        PASSWORD_TOO_SHORT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod username_tests {
        use super::*;

        #[test]
        fn test_short_usernames_rejected() {
            let short_cases = vec!["", "a", "ab", "abc"];

            for username in short_cases {
                assert_eq!(
                    validate_username(username),
                    ValidationResult::Invalid(USERNAME_TOO_SHORT),
                    "Username '{}' should be too short !",
                    username
                );
            }
        }

        #[test]
        fn test_valid_usernames() {
            let valid_cases = vec!["abcd", "alice", "bob_user", "    ", "a@#$"];

            for username in valid_cases {
                assert!(
                    validate_username(username).is_valid(),
                    "Username '{}' was rejected !",
                    username
                );
            }
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // Four characters, more than four bytes
            assert!(validate_username("ñáéí").is_valid());
            assert!(!validate_username("ñáé").is_valid());
        }
    }

    mod email_tests {
        use super::*;

        #[test]
        fn test_valid_emails() {
            let valid_cases = vec![
                "a@b.co",
                "user@example.com",
                "first.last@sub.domain.org",
                "user+tag@example.io",
            ];

            for email in valid_cases {
                assert!(
                    validate_email(email).is_valid(),
                    "Valid email '{}' was rejected !",
                    email
                );
            }
        }

        #[test]
        fn test_invalid_emails() {
            let invalid_cases = vec![
                "",
                "not-an-email",
                "a@b.info",    // top-level segment longer than 3
                "a@b.COM",     // uppercase top-level segment
                "a@b.c",       // top-level segment shorter than 2
                "a b@c.com",   // space in local part
                "a@b c.com",   // space in domain part
                "user@domain", // no top-level segment at all
            ];

            for email in invalid_cases {
                assert_eq!(
                    validate_email(email),
                    ValidationResult::Invalid(EMAIL_INVALID),
                    "Invalid email '{}' was accepted !",
                    email
                );
            }
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_short_passwords_rejected_with_length_message() {
            let short_cases = vec!["", "a", "1234567", "!@#$%^&"];

            for password in short_cases {
                assert_eq!(
                    validate_password(password),
                    ValidationResult::Invalid(PASSWORD_TOO_SHORT),
                    "Password '{}' should fail on length first",
                    password
                );
                assert_eq!(
                    validate_login_password(password),
                    ValidationResult::Invalid(PASSWORD_TOO_SHORT),
                    "Login password '{}' should fail on length",
                    password
                );
            }
        }

        #[test]
        fn test_long_password_without_special_character() {
            let no_special_cases = vec!["abcdefgh", "password123", "LongButPlain"];

            for password in no_special_cases {
                assert_eq!(
                    validate_password(password),
                    ValidationResult::Invalid(PASSWORD_NO_SPECIAL),
                    "Password '{}' has no special character",
                    password
                );
                // Login keeps the weaker rule on purpose
                assert!(
                    validate_login_password(password).is_valid(),
                    "Login password '{}' was rejected !",
                    password
                );
            }
        }

        #[test]
        fn test_valid_passwords() {
            let valid_cases = vec![
                "abcdefg!",
                "p@ssword",
                "hello,world",
                "question?mark",
                "with\"quote",
                "curly{brace}",
                "pipe|char1",
                "angle<char>",
            ];

            for password in valid_cases {
                assert!(
                    validate_password(password).is_valid(),
                    "Password '{}' was rejected !",
                    password
                );
            }
        }

        #[test]
        fn test_only_one_message_per_call() {
            // Fails both conditions, only the length message is produced
            assert_eq!(
                validate_password("abc"),
                ValidationResult::Invalid(PASSWORD_TOO_SHORT)
            );
        }
    }

    mod result_tests {
        use super::*;

        #[test]
        fn test_message_is_empty_for_valid() {
            assert_eq!(validate_username("alice").message(), "");
            assert_eq!(validate_username("a").message(), USERNAME_TOO_SHORT);
        }

        #[test]
        fn test_rules_are_deterministic() {
            let inputs = vec!["", "abc", "alice", "p@ssword", "a@b.co"];

            for input in inputs {
                assert_eq!(validate_username(input), validate_username(input));
                assert_eq!(validate_email(input), validate_email(input));
                assert_eq!(validate_password(input), validate_password(input));
                assert_eq!(
                    validate_login_password(input),
                    validate_login_password(input)
                );
            }
        }

        #[test]
        fn test_into_result_carries_message() {
            let err = validate_email("nope").into_result().unwrap_err();
            assert_eq!(err.0, EMAIL_INVALID);
            assert!(validate_email("a@b.co").into_result().is_ok());
        }
    }
}
