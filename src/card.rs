//! The success value of the validation pipeline.

use crate::network::CardNetwork;
use crate::provider::SupportedProvider;
use std::fmt;

/// A card number that passed every stage of the pipeline.
///
/// Holds only derived facts (provider, network, digit count), never the
/// digits themselves, so it is safe to log and to keep around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatedCard {
    provider: SupportedProvider,
    network: CardNetwork,
    length: u8,
}

impl ValidatedCard {
    #[inline]
    pub(crate) const fn new(provider: SupportedProvider, network: CardNetwork, length: u8) -> Self {
        Self {
            provider,
            network,
            length,
        }
    }

    /// Returns the canonical supported provider.
    #[inline]
    pub const fn provider(&self) -> SupportedProvider {
        self.provider
    }

    /// Returns the network the classifier detected.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} digits)", self.provider, self.length)
    }
}
