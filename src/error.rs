//! Rich error types for the card validation pipeline.
//!
//! Every failure carries the structured detail a caller needs to build a
//! precise message (bounds, observed length, offending network) without
//! re-deriving it from the input.

use crate::network::CardNetwork;
use std::fmt;
use thiserror::Error;

/// Why a card number was rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// Nothing was left after removing spaces and hyphens.
    Empty,
    /// A character other than an ASCII digit survived normalization.
    NonNumeric,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number cannot be empty"),
            Self::NonNumeric => write!(
                f,
                "card number can only contain digits; non-numeric characters detected"
            ),
        }
    }
}

/// Errors produced by [`validate`](crate::validate()).
///
/// Variants are listed in pipeline order: a card number is only ever
/// rejected by the first stage that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was empty or contained non-digit characters.
    #[error("{0}")]
    Malformed(MalformedReason),

    /// The card number has too few digits.
    #[error("card number must be at least {minimum} digits; received {length} digits")]
    TooShort {
        /// The minimum required digits (13).
        minimum: usize,
        /// The actual number of characters after normalization.
        length: usize,
    },

    /// The card number has too many digits.
    #[error("card number cannot exceed {maximum} digits; received {length} digits")]
    TooLong {
        /// The maximum allowed digits (19).
        maximum: usize,
        /// The actual number of characters after normalization.
        length: usize,
    },

    /// The Luhn checksum validation failed.
    ///
    /// Hyphen-formatted input also lands here: the checksum stage only
    /// strips spaces.
    #[error("card number failed validation check (invalid checksum)")]
    InvalidChecksum,

    /// No known network matched the card's prefix and length.
    #[error("unsupported card type")]
    UnsupportedCardType,

    /// The card belongs to a recognised network that is not accepted.
    #[error("card type '{network}' is not supported")]
    UnsupportedProvider {
        /// The network the classifier detected.
        network: CardNetwork,
    },
}

/// The category of a [`ValidationError`], without its detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Empty or non-numeric input.
    Malformed,
    /// Fewer than the minimum digits.
    TooShort,
    /// More than the maximum digits.
    TooLong,
    /// Luhn checksum mismatch.
    ChecksumFailed,
    /// No network pattern matched.
    Unclassified,
    /// Network recognised but not in the supported set.
    UnsupportedProvider,
}

impl FailureKind {
    /// Short snake_case name, used as a log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::ChecksumFailed => "checksum_failed",
            Self::Unclassified => "unclassified",
            Self::UnsupportedProvider => "unsupported_provider",
        }
    }
}

impl ValidationError {
    /// Returns the failure category.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Malformed(_) => FailureKind::Malformed,
            Self::TooShort { .. } => FailureKind::TooShort,
            Self::TooLong { .. } => FailureKind::TooLong,
            Self::InvalidChecksum => FailureKind::ChecksumFailed,
            Self::UnsupportedCardType => FailureKind::Unclassified,
            Self::UnsupportedProvider { .. } => FailureKind::UnsupportedProvider,
        }
    }
}

/// Errors produced when parsing a provider label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The label was empty or whitespace only.
    #[error("value cannot be null or whitespace")]
    Blank,

    /// The label does not name a supported provider.
    #[error("'{value}' is not a valid credit card provider")]
    NotAProvider {
        /// The rejected label, as given.
        value: String,
    },
}
