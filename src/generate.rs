//! Test card number generation.
//!
//! Generated numbers pass the Luhn check and classify as the requested
//! network. They are not connected to real accounts and are meant for tests
//! and demos only.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::generate_deterministic;
//! use cardcheck::network::{classify, CardNetwork};
//!
//! let card = generate_deterministic(CardNetwork::MasterCard);
//! assert!(card.starts_with("51"));
//! assert_eq!(classify(&card), Some(CardNetwork::MasterCard));
//! assert!(cardcheck::is_valid(card.as_str()));
//! ```

use crate::luhn;
use crate::network::CardNetwork;
use thiserror::Error;

#[cfg(feature = "generate")]
use rand::Rng;

/// Errors from prefix-based generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The prefix contains a character other than an ASCII digit.
    #[error("prefix must contain only digits")]
    NonDigitPrefix,

    /// The prefix leaves no room for the check digit.
    #[error("prefix of {prefix_len} digits leaves no room in a {length}-digit card")]
    PrefixTooLong {
        /// Digits in the prefix.
        prefix_len: usize,
        /// Requested total length.
        length: usize,
    },
}

/// Returns the prefix used when generating cards for a network.
pub const fn prefix_for(network: CardNetwork) -> &'static str {
    match network {
        CardNetwork::Visa => "4",
        CardNetwork::MasterCard => "51",
        CardNetwork::AmericanExpress => "34",
        CardNetwork::Discover => "6011",
        CardNetwork::Jcb => "3528",
        CardNetwork::DinersClub => "36",
        CardNetwork::Maestro => "50",
    }
}

/// Returns the length used when generating cards for a network.
pub const fn length_for(network: CardNetwork) -> usize {
    match network {
        CardNetwork::AmericanExpress => 15,
        CardNetwork::DinersClub => 14,
        _ => 16,
    }
}

fn prefix_digits(prefix: &str, length: usize) -> Result<Vec<u8>, GenerateError> {
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenerateError::NonDigitPrefix);
    }
    if prefix.len() >= length {
        return Err(GenerateError::PrefixTooLong {
            prefix_len: prefix.len(),
            length,
        });
    }

    let mut digits = Vec::with_capacity(length);
    digits.extend(prefix.bytes().map(|b| b - b'0'));
    Ok(digits)
}

fn finish(mut digits: Vec<u8>) -> String {
    let check = luhn::generate_check_digit(&digits);
    digits.push(check);
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a card for `network` with zero-filled body digits.
///
/// Same input, same output. Does not need the `generate` feature.
pub fn generate_deterministic(network: CardNetwork) -> String {
    let mut digits: Vec<u8> = prefix_for(network).bytes().map(|b| b - b'0').collect();
    digits.resize(length_for(network) - 1, 0);
    finish(digits)
}

/// Generates a zero-filled card with a custom prefix and length.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_deterministic_with_prefix;
///
/// let card = generate_deterministic_with_prefix("411111", 16).unwrap();
/// assert_eq!(card, "4111110000000005");
/// assert!(generate_deterministic_with_prefix("4x", 16).is_err());
/// ```
pub fn generate_deterministic_with_prefix(
    prefix: &str,
    length: usize,
) -> Result<String, GenerateError> {
    let mut digits = prefix_digits(prefix, length)?;
    digits.resize(length - 1, 0);
    Ok(finish(digits))
}

/// Generates a random card number for `network`.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
#[cfg(feature = "generate")]
pub fn generate(network: CardNetwork) -> String {
    generate_with_rng(network, &mut rand::thread_rng())
}

/// Generates `count` random card numbers for `network`.
#[cfg(feature = "generate")]
pub fn generate_many(network: CardNetwork, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| generate_with_rng(network, &mut rng)).collect()
}

/// Generates a card number for `network` from the given RNG.
///
/// Useful with a seeded RNG for reproducible fixtures.
#[cfg(feature = "generate")]
pub fn generate_with_rng<R: Rng + ?Sized>(network: CardNetwork, rng: &mut R) -> String {
    let mut digits: Vec<u8> = prefix_for(network).bytes().map(|b| b - b'0').collect();
    fill_random(&mut digits, length_for(network) - 1, rng);
    finish(digits)
}

/// Generates a random card number with a custom prefix and length.
///
/// The result passes the Luhn check but may not belong to any network.
#[cfg(feature = "generate")]
pub fn generate_with_prefix<R: Rng + ?Sized>(
    prefix: &str,
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut digits = prefix_digits(prefix, length)?;
    fill_random(&mut digits, length - 1, rng);
    Ok(finish(digits))
}

#[cfg(feature = "generate")]
fn fill_random<R: Rng + ?Sized>(digits: &mut Vec<u8>, body_len: usize, rng: &mut R) {
    while digits.len() < body_len {
        digits.push(rng.gen_range(0..10));
    }
}
