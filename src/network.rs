//! Card network classification using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading part of a card number. Each network owns a set
//! of prefix ranges and a set of allowed lengths.
//!
//! Several prefix ranges overlap (Maestro's `6` swallows Discover's `6011`,
//! `65` and `644`-`649`), so classification walks [`NETWORK_PATTERNS`] in
//! declared order and returns the first match. The order is the tie-break.

use crate::normalize::normalize;
use std::fmt;

/// Card networks the classifier can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - Prefix 51-55, 222100-272099, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// Discover - Prefix 6011, 65, 644-649, 622126-622925, length 16
    Discover,
    /// JCB - Prefix 3528-3589, length 16
    Jcb,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// Maestro - Prefix 50, 56-59, 6, length 12-19
    Maestro,
}

impl CardNetwork {
    /// All networks in classification order.
    pub const ALL: [CardNetwork; 7] = [
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::Maestro,
    ];

    /// Returns the network label.
    ///
    /// Multi-word networks use their spaced form (`American Express`,
    /// `Diners Club`); this is the label handed to the provider check.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Maestro => "Maestro",
        }
    }

    /// Returns the card lengths this network issues.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::MasterCard => &[16],
            Self::AmericanExpress => &[15],
            Self::Discover => &[16],
            Self::Jcb => &[16],
            Self::DinersClub => &[14],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    /// Returns true if `digits` matches this network's prefix and length rules.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        match self {
            Self::Visa => is_visa(digits),
            Self::MasterCard => is_mastercard(digits),
            Self::AmericanExpress => is_amex(digits),
            Self::Discover => is_discover(digits),
            Self::Jcb => is_jcb(digits),
            Self::DinersClub => is_diners_club(digits),
            Self::Maestro => is_maestro(digits),
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classification rule: the network and its predicate over digit values.
pub type NetworkPattern = (CardNetwork, fn(&[u8]) -> bool);

/// Classification table, evaluated top to bottom.
///
/// Maestro comes last: its prefix set is the broadest and would shadow the
/// more specific ranges above it.
pub static NETWORK_PATTERNS: [NetworkPattern; 7] = [
    (CardNetwork::Visa, is_visa),
    (CardNetwork::MasterCard, is_mastercard),
    (CardNetwork::AmericanExpress, is_amex),
    (CardNetwork::Discover, is_discover),
    (CardNetwork::Jcb, is_jcb),
    (CardNetwork::DinersClub, is_diners_club),
    (CardNetwork::Maestro, is_maestro),
];

/// Classifies a card number string.
///
/// Spaces and hyphens are removed first. Any other non-digit character means
/// no network matches.
///
/// # Example
///
/// ```
/// use cardcheck::network::{classify, CardNetwork};
///
/// assert_eq!(classify("4111 1111 1111 1111"), Some(CardNetwork::Visa));
/// assert_eq!(classify("378282246310005"), Some(CardNetwork::AmericanExpress));
/// assert_eq!(classify("1234567890123456"), None);
/// ```
pub fn classify(input: &str) -> Option<CardNetwork> {
    let normalized = normalize(input);
    if normalized.is_empty() || !normalized.is_all_digits() {
        return None;
    }

    let digits: Vec<u8> = normalized.bytes().map(|b| b - b'0').collect();
    classify_digits(&digits)
}

/// Classifies a sequence of digit values (0-9).
///
/// # Example
///
/// ```
/// use cardcheck::network::{classify_digits, CardNetwork};
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(classify_digits(&visa), Some(CardNetwork::Visa));
/// ```
#[inline]
pub fn classify_digits(digits: &[u8]) -> Option<CardNetwork> {
    NETWORK_PATTERNS
        .iter()
        .find(|(_, predicate)| predicate(digits))
        .map(|&(network, _)| network)
}

/// Reads the first `n` digits as a number. `None` if there are fewer.
#[inline]
fn prefix_value(digits: &[u8], n: usize) -> Option<u32> {
    digits
        .get(..n)
        .map(|prefix| prefix.iter().fold(0u32, |acc, &d| acc * 10 + d as u32))
}

#[inline]
fn prefix_in(digits: &[u8], n: usize, low: u32, high: u32) -> bool {
    prefix_value(digits, n).is_some_and(|p| (low..=high).contains(&p))
}

fn is_visa(digits: &[u8]) -> bool {
    matches!(digits, [4, ..]) && matches!(digits.len(), 13 | 16 | 19)
}

fn is_mastercard(digits: &[u8]) -> bool {
    digits.len() == 16
        && (matches!(digits, [5, 1..=5, ..]) || prefix_in(digits, 6, 222_100, 272_099))
}

fn is_amex(digits: &[u8]) -> bool {
    digits.len() == 15 && matches!(digits, [3, 4 | 7, ..])
}

fn is_discover(digits: &[u8]) -> bool {
    digits.len() == 16
        && (matches!(digits, [6, 0, 1, 1, ..] | [6, 5, ..] | [6, 4, 4..=9, ..])
            || prefix_in(digits, 6, 622_126, 622_925))
}

fn is_jcb(digits: &[u8]) -> bool {
    digits.len() == 16 && prefix_in(digits, 4, 3528, 3589)
}

fn is_diners_club(digits: &[u8]) -> bool {
    digits.len() == 14 && matches!(digits, [3, 0, 0..=5, ..] | [3, 6 | 8, ..])
}

fn is_maestro(digits: &[u8]) -> bool {
    (12..=19).contains(&digits.len()) && matches!(digits, [5, 0, ..] | [5, 6..=9, ..] | [6, ..])
}
