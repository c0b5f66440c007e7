//! Batch validation of many card numbers.
//!
//! Every function preserves input order. With the `parallel` feature the
//! `*_parallel` variants spread the work over rayon's global pool.

use crate::card::ValidatedCard;
use crate::error::{FailureKind, ValidationError};
use crate::validate::validate;

/// Outcome of validating one card.
pub type CardResult = Result<ValidatedCard, ValidationError>;

/// Validates a slice of cards, one result per input.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// let cards = ["4111111111111111", "5555555555554444", "30569309025904"];
/// let results = validate_batch(&cards);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_ok());
/// assert!(results[2].is_err());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<CardResult> {
    cards.iter().map(|c| validate(c.as_ref())).collect()
}

/// Validates a slice of cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<CardResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate(c.as_ref())).collect()
}

/// Validates a batch and splits it into accepted cards and indexed errors.
///
/// The index in each error pair points back into `cards`.
pub fn validate_partitioned<S: AsRef<str>>(
    cards: &[S],
) -> (Vec<ValidatedCard>, Vec<(usize, ValidationError)>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for (i, card) in cards.iter().enumerate() {
        match validate(card.as_ref()) {
            Ok(c) => valid.push(c),
            Err(e) => invalid.push((i, e)),
        }
    }

    (valid, invalid)
}

/// Counts valid and invalid cards without keeping the results.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5555555555554444"];
/// assert_eq!(count_valid(&cards), (2, 1));
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| validate(c.as_ref()).is_ok()).count();
    (valid, cards.len() - valid)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| validate(c.as_ref()).is_ok())
        .count();

    (valid, cards.len() - valid)
}

/// Per-category tally of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct BatchSummary {
    /// Number of cards in the batch.
    pub total: usize,
    /// Cards that passed every stage.
    pub valid: usize,
    /// Empty or non-numeric input.
    pub malformed: usize,
    /// Fewer than 13 digits.
    pub too_short: usize,
    /// More than 19 digits.
    pub too_long: usize,
    /// Luhn checksum mismatch.
    pub checksum_failed: usize,
    /// No network matched.
    pub unclassified: usize,
    /// Recognised network outside the supported set.
    pub unsupported_provider: usize,
}

impl BatchSummary {
    /// Tallies a slice of results.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcheck::batch::{validate_batch, BatchSummary};
    ///
    /// let results = validate_batch(&["4111111111111111", "123", "4111111111111112"]);
    /// let summary = BatchSummary::from_results(&results);
    /// assert_eq!(summary.valid, 1);
    /// assert_eq!(summary.too_short, 1);
    /// assert_eq!(summary.checksum_failed, 1);
    /// ```
    pub fn from_results(results: &[CardResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.record(result);
            summary
        })
    }

    /// Adds one result to the tally.
    pub fn record(&mut self, result: &CardResult) {
        self.total += 1;
        let counter = match result {
            Ok(_) => &mut self.valid,
            Err(e) => match e.kind() {
                FailureKind::Malformed => &mut self.malformed,
                FailureKind::TooShort => &mut self.too_short,
                FailureKind::TooLong => &mut self.too_long,
                FailureKind::ChecksumFailed => &mut self.checksum_failed,
                FailureKind::Unclassified => &mut self.unclassified,
                FailureKind::UnsupportedProvider => &mut self.unsupported_provider,
            },
        };
        *counter += 1;
    }

    /// Number of rejected cards.
    #[inline]
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}
