//! Mapping of validation outcomes onto HTTP-style status codes and payloads.
//!
//! | Outcome | Status |
//! |---------|--------|
//! | success | 200 |
//! | malformed, too short, bad checksum | 400 |
//! | too long | 414 |
//! | unclassified or unsupported provider | 406 |

use crate::batch::CardResult;
use crate::error::ValidationError;
use crate::provider::SupportedProvider;

/// Message carried by every successful response.
pub const SUCCESS_MESSAGE: &str = "Card validation successful";

/// 200 OK
pub const STATUS_OK: u16 = 200;
/// 400 Bad Request
pub const STATUS_BAD_REQUEST: u16 = 400;
/// 406 Not Acceptable
pub const STATUS_NOT_ACCEPTABLE: u16 = 406;
/// 414 URI Too Long
pub const STATUS_TOO_LONG: u16 = 414;

impl ValidationError {
    /// Status code this failure maps to.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Malformed(_) | Self::TooShort { .. } | Self::InvalidChecksum => {
                STATUS_BAD_REQUEST
            }
            Self::TooLong { .. } => STATUS_TOO_LONG,
            Self::UnsupportedCardType | Self::UnsupportedProvider { .. } => STATUS_NOT_ACCEPTABLE,
        }
    }
}

/// Status code for a pipeline outcome.
///
/// # Example
///
/// ```
/// use cardcheck::{response::status_code, validate};
///
/// assert_eq!(status_code(&validate("4532015112830366")), 200);
/// assert_eq!(status_code(&validate("123456789")), 400);
/// assert_eq!(status_code(&validate("30569309025904")), 406);
/// ```
#[inline]
pub fn status_code(result: &CardResult) -> u16 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}

/// Response body for a single validation.
///
/// Only the fields relevant to the outcome are set; the rest are omitted
/// when serialized. Field names serialize in camelCase (`cardType`,
/// `minLength`, `actualLength`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ValidationResponse {
    /// Set on success.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
    /// Canonical provider, set on success.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub card_type: Option<SupportedProvider>,
    /// Failure description.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
    /// Minimum digit count, set when the card was too short.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_length: Option<usize>,
    /// Maximum digit count, set when the card was too long.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_length: Option<usize>,
    /// Observed digit count, set on length failures.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub actual_length: Option<usize>,
}

impl ValidationResponse {
    /// A response carrying only an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Builds the body for a pipeline outcome.
    pub fn from_result(result: &CardResult) -> Self {
        match result {
            Ok(card) => Self {
                message: Some(SUCCESS_MESSAGE.to_string()),
                card_type: Some(card.provider()),
                ..Self::default()
            },
            Err(e @ ValidationError::TooShort { minimum, length }) => Self {
                min_length: Some(*minimum),
                actual_length: Some(*length),
                ..Self::error(e.to_string())
            },
            Err(e @ ValidationError::TooLong { maximum, length }) => Self {
                max_length: Some(*maximum),
                actual_length: Some(*length),
                ..Self::error(e.to_string())
            },
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Status code and body for a pipeline outcome.
///
/// # Example
///
/// ```
/// use cardcheck::{response::respond, validate, SupportedProvider};
///
/// let (status, body) = respond(&validate("378282246310005"));
/// assert_eq!(status, 200);
/// assert_eq!(body.card_type, Some(SupportedProvider::AmericanExpress));
/// ```
pub fn respond(result: &CardResult) -> (u16, ValidationResponse) {
    (status_code(result), ValidationResponse::from_result(result))
}
