//! Luhn algorithm implementation for card number checksums.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! The string entry point, [`passes_luhn`], removes spaces but not hyphens: a
//! hyphenated number is treated as containing non-digits and fails.

use crate::normalize::strip_spaces;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string against the Luhn checksum.
///
/// Spaces are removed first. Any remaining character that is not an ASCII
/// digit makes the result `false`; this never panics.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::passes_luhn;
///
/// assert!(passes_luhn("4532015112830366"));
/// assert!(passes_luhn("4532 0151 1283 0366"));
/// assert!(!passes_luhn("4532015112830367"));
/// // Hyphens are not stripped at this stage
/// assert!(!passes_luhn("4532-0151-1283-0366"));
/// ```
pub fn passes_luhn(input: &str) -> bool {
    let cleaned = strip_spaces(input);
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u8> = cleaned.bytes().map(|b| b - b'0').collect();
    validate(&digits)
}

/// Validates a sequence of digit values using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// An empty slice sums to zero and is therefore valid.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// Values above 9 in `digits` are reduced modulo 10 rather than indexing
/// out of the lookup table.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = d % 10;
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one position left once the check digit
    // is appended, so the doubling parity flips.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = d % 10;
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
