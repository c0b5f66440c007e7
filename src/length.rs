//! Length and composition checks.
//!
//! The digit-count window is 13 to 19: the shortest commonly issued numbers
//! are 13-digit Visa cards, the longest are 19-digit Visa and Maestro cards.

use crate::error::{MalformedReason, ValidationError};
use crate::normalize::normalize;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Checks that a card number is non-empty, within the digit window and
/// digit-only.
///
/// The input is normalized first, so formatted numbers are accepted.
/// Checks run in order: empty, too short, too long, non-numeric. A string
/// of 5 letters is therefore reported as too short rather than malformed.
///
/// # Example
///
/// ```
/// use cardcheck::length::check_length;
/// use cardcheck::ValidationError;
///
/// assert!(check_length("4111 1111 1111 1111").is_ok());
/// assert_eq!(
///     check_length("123456789"),
///     Err(ValidationError::TooShort { minimum: 13, length: 9 })
/// );
/// ```
pub fn check_length<'a>(input: impl Into<Option<&'a str>>) -> Result<(), ValidationError> {
    let normalized = normalize(input);
    let length = normalized.char_count();

    if length == 0 {
        return Err(ValidationError::Malformed(MalformedReason::Empty));
    }

    if length < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            minimum: MIN_CARD_DIGITS,
            length,
        });
    }

    if length > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            maximum: MAX_CARD_DIGITS,
            length,
        });
    }

    if !normalized.is_all_digits() {
        return Err(ValidationError::Malformed(MalformedReason::NonNumeric));
    }

    Ok(())
}
