//! # cardcheck
//!
//! Payment card number validation as a short-circuiting pipeline:
//!
//! 1. **normalize** - strip spaces and hyphens
//! 2. **length** - 13 to 19 digits, digits only
//! 3. **luhn** - mod-10 checksum
//! 4. **network** - classify the issuing network from its prefix
//! 5. **provider** - accept only Visa, MasterCard and American Express
//!
//! The first failing stage decides the outcome, and every outcome maps to a
//! fixed status code (see [`response`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate, is_valid, SupportedProvider, ValidationError};
//!
//! let card = validate("4532 0151 1283 0366").unwrap();
//! assert_eq!(card.provider(), SupportedProvider::Visa);
//! assert_eq!(card.length(), 16);
//!
//! // Recognised, but not accepted
//! let err = validate("30569309025904").unwrap_err();
//! assert!(matches!(err, ValidationError::UnsupportedProvider { .. }));
//!
//! assert!(is_valid("378282246310005"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Formatting
//!
//! Spaces are accepted everywhere. Hyphens pass the length check but fail
//! the checksum, which only strips spaces:
//!
//! ```rust
//! use cardcheck::{validate, ValidationError};
//!
//! assert!(validate("4532 0151 1283 0366").is_ok());
//! assert_eq!(
//!     validate("4532-0151-1283-0366").unwrap_err(),
//!     ValidationError::InvalidChecksum
//! );
//! ```
//!
//! ## Network Classification
//!
//! | Network | Prefix | Length | Accepted |
//! |---------|--------|--------|----------|
//! | Visa | 4 | 13, 16, 19 | yes |
//! | MasterCard | 51-55, 222100-272099 | 16 | yes |
//! | American Express | 34, 37 | 15 | yes |
//! | Discover | 6011, 65, 644-649, 622126-622925 | 16 | no |
//! | JCB | 3528-3589 | 16 | no |
//! | Diners Club | 300-305, 36, 38 | 14 | no |
//! | Maestro | 50, 56-59, 6 | 12-19 | no |
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardcheck::batch::{self, BatchSummary};
//!
//! let cards = ["4111111111111111", "5555555555554444", "invalid"];
//! let results = batch::validate_batch(&cards);
//! assert_eq!(results.len(), 3);
//!
//! let summary = BatchSummary::from_results(&results);
//! assert_eq!(summary.valid, 2);
//! assert_eq!(summary.too_short, 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serializable response payloads |
//! | `parallel` | Rayon-based batch validation |
//! | `generate` | Random test card generation |
//! | `cli` | `cardcheck` command-line tool |
//! | `server` | `cardcheck-server` REST API with Swagger UI |
//!
//! ## Security
//!
//! - Normalized card digits live in zeroizing buffers
//! - [`ValidatedCard`] keeps no digits at all
//! - Log events carry lengths and categories, never numbers
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod error;
pub mod generate;
pub mod length;
pub mod luhn;
pub mod network;
pub mod normalize;
pub mod provider;
pub mod response;
pub mod validate;

// Re-export main types at crate root
pub use card::ValidatedCard;
pub use error::{FailureKind, MalformedReason, ProviderError, ValidationError};
pub use length::{check_length, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use luhn::passes_luhn;
pub use network::{classify, CardNetwork};
pub use normalize::normalize;
pub use provider::SupportedProvider;
pub use validate::{is_valid, validate};
