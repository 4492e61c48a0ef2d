//! Title validation.
//!
//! Rules run in order and stop at the first failure:
//! 1) character count within bounds
//! 2) allowed character set (ASCII letters, digits, spaces)
//! 3) no case-insensitive duplicate among existing titles

use crate::task::Task;

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 60;

// The user-facing text reads 4-60; the guard below is < 5. Kept as-is.
const LENGTH_MESSAGE: &str = "Invalid todo length. Valid length: 4-60 characters.";
const CHARSET_MESSAGE: &str = "The text has special characters.";
const DUPLICATE_MESSAGE: &str = "This todo already exists";

/// Outcome of validating a candidate title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when `valid` is true.
    pub message: String,
}

impl ValidationResult {
    fn pass() -> Self {
        ValidationResult {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        ValidationResult {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validate a candidate title against the rules and the existing tasks.
///
/// Pure: no IO, no mutation. Works the same on an empty or populated list.
pub fn validate(candidate: &str, existing: &[Task]) -> ValidationResult {
    let length = candidate.chars().count();
    if length < MIN_LENGTH || length > MAX_LENGTH {
        return ValidationResult::fail(LENGTH_MESSAGE);
    }

    if candidate.chars().any(|c| !is_allowed_char(c)) {
        return ValidationResult::fail(CHARSET_MESSAGE);
    }

    if is_duplicate(candidate, existing) {
        return ValidationResult::fail(DUPLICATE_MESSAGE);
    }

    ValidationResult::pass()
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

fn is_duplicate(candidate: &str, existing: &[Task]) -> bool {
    let lowered = candidate.to_lowercase();
    existing.iter().any(|task| task.title.to_lowercase() == lowered)
}
