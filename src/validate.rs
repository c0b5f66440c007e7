//! Main validation orchestration for card numbers.
//!
//! [`validate`] runs the stages in a fixed order and stops at the first
//! failure:
//!
//! 1. length and composition ([`check_length`])
//! 2. Luhn checksum ([`passes_luhn`])
//! 3. network classification ([`classify`])
//! 4. provider restriction ([`SupportedProvider::from_label`])
//!
//! The checksum stage strips spaces but not hyphens, while the length stage
//! strips both. A hyphen-formatted number therefore passes stage 1 and fails
//! stage 2.

use crate::card::ValidatedCard;
use crate::error::ValidationError;
use crate::length::check_length;
use crate::luhn::passes_luhn;
use crate::network::classify;
use crate::normalize::normalize;
use crate::provider::SupportedProvider;

/// Validates a card number string.
///
/// `None` is treated like an empty string.
///
/// # Returns
///
/// * `Ok(ValidatedCard)` - If the card passes every stage
/// * `Err(ValidationError)` - The failure of the first stage that rejected it
///
/// # Example
///
/// ```
/// use cardcheck::{validate, SupportedProvider, ValidationError};
///
/// let card = validate("4532 0151 1283 0366").unwrap();
/// assert_eq!(card.provider(), SupportedProvider::Visa);
///
/// let err = validate("4532015112830367").unwrap_err();
/// assert_eq!(err, ValidationError::InvalidChecksum);
/// ```
pub fn validate<'a>(input: impl Into<Option<&'a str>>) -> Result<ValidatedCard, ValidationError> {
    let input = input.into();
    let result = run_stages(input.unwrap_or_default());

    match &result {
        Ok(card) => {
            tracing::trace!(
                provider = card.provider().as_str(),
                length = card.length(),
                "card number accepted"
            );
        }
        Err(e) => {
            let network = match e {
                ValidationError::UnsupportedProvider { network } => Some(network.name()),
                _ => None,
            };
            tracing::debug!(
                kind = e.kind().as_str(),
                length = normalize(input).char_count(),
                network,
                error = %e,
                "card number rejected"
            );
        }
    }

    result
}

fn run_stages(input: &str) -> Result<ValidatedCard, ValidationError> {
    check_length(input)?;

    if !passes_luhn(input) {
        return Err(ValidationError::InvalidChecksum);
    }

    let network = classify(input).ok_or(ValidationError::UnsupportedCardType)?;

    let provider = SupportedProvider::from_label(network.name())
        .map_err(|_| ValidationError::UnsupportedProvider { network })?;

    // check_length bounds this to 19
    let length = normalize(input).len() as u8;

    Ok(ValidatedCard::new(provider, network, length))
}

/// Quickly checks if a card number passes the whole pipeline.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("30569309025904")); // Diners Club is not supported
/// ```
#[inline]
pub fn is_valid<'a>(input: impl Into<Option<&'a str>>) -> bool {
    validate(input).is_ok()
}
