//! Supported payment providers.
//!
//! The classifier recognises seven networks, but only three are accepted
//! downstream. [`SupportedProvider::from_label`] turns a network label into
//! one of those three, or rejects it.

use crate::error::ProviderError;
use crate::network::CardNetwork;
use std::fmt;
use std::str::FromStr;

/// Providers the system accepts.
///
/// Serializes as its canonical name (`Visa`, `MasterCard`,
/// `AmericanExpress`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum SupportedProvider {
    /// Visa
    Visa,
    /// Mastercard
    MasterCard,
    /// American Express
    AmericanExpress,
}

impl SupportedProvider {
    /// All supported providers.
    pub const ALL: [SupportedProvider; 3] = [Self::Visa, Self::MasterCard, Self::AmericanExpress];

    /// Returns the canonical, single-token provider name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "AmericanExpress",
        }
    }

    /// Returns the network this provider corresponds to.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        match self {
            Self::Visa => CardNetwork::Visa,
            Self::MasterCard => CardNetwork::MasterCard,
            Self::AmericanExpress => CardNetwork::AmericanExpress,
        }
    }

    /// Parses a provider label, case-insensitively.
    ///
    /// Accepts the canonical names plus the spaced phrase `American Express`.
    /// Surrounding whitespace is ignored. Blank and all-digit labels are
    /// rejected outright.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcheck::SupportedProvider;
    ///
    /// assert_eq!(SupportedProvider::from_label("visa"), Ok(SupportedProvider::Visa));
    /// assert_eq!(
    ///     SupportedProvider::from_label("American Express"),
    ///     Ok(SupportedProvider::AmericanExpress)
    /// );
    /// assert!(SupportedProvider::from_label("Discover").is_err());
    /// assert!(SupportedProvider::from_label(None::<&str>).is_err());
    /// ```
    pub fn from_label<'a>(label: impl Into<Option<&'a str>>) -> Result<Self, ProviderError> {
        let value = match label.into() {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Err(ProviderError::Blank),
        };

        let not_a_provider = || ProviderError::NotAProvider {
            value: value.to_string(),
        };

        // Numeric strings never name a provider, whatever the variant order.
        if value.chars().all(|c| c.is_ascii_digit()) {
            return Err(not_a_provider());
        }

        // Padding is ignored for the canonical names and the spaced phrase alike.
        let trimmed = value.trim();
        if let Some(provider) = Self::ALL
            .into_iter()
            .find(|p| trimmed.eq_ignore_ascii_case(p.as_str()))
        {
            return Ok(provider);
        }

        if trimmed.eq_ignore_ascii_case("American Express") {
            return Ok(Self::AmericanExpress);
        }

        Err(not_a_provider())
    }
}

impl FromStr for SupportedProvider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<CardNetwork> for SupportedProvider {
    type Error = ProviderError;

    /// Restricts a network via its label, exactly as the pipeline does.
    fn try_from(network: CardNetwork) -> Result<Self, Self::Error> {
        Self::from_label(network.name())
    }
}

impl From<SupportedProvider> for CardNetwork {
    fn from(provider: SupportedProvider) -> Self {
        provider.network()
    }
}

impl fmt::Display for SupportedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
