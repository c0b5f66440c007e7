//! Input normalization for raw card numbers.
//!
//! Card numbers arrive formatted in many ways (`4111 1111 1111 1111`,
//! `4111-1111-1111-1111`). Normalization removes the two accepted separator
//! characters, ASCII space and hyphen, and leaves everything else untouched
//! so later stages can still see stray letters or symbols.

use std::fmt;
use std::ops::Deref;
use zeroize::Zeroizing;

/// Separator characters removed by [`normalize`].
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// A card number with spaces and hyphens removed.
///
/// Not guaranteed to be digit-only. The buffer is wiped when the value is
/// dropped, and `Debug` never prints its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedCard(Zeroizing<String>);

impl NormalizedCard {
    /// Returns the normalized text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    #[inline]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if every character is an ASCII digit.
    ///
    /// An empty value is vacuously all-digit.
    #[inline]
    pub fn is_all_digits(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Deref for NormalizedCard {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for NormalizedCard {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for NormalizedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedCard")
            .field("chars", &self.char_count())
            .finish()
    }
}

/// Removes every ASCII space and hyphen from the input.
///
/// `None` (a null input) normalizes to the empty string. No other
/// character is altered, including tabs and non-ASCII whitespace.
///
/// # Example
///
/// ```
/// use cardcheck::normalize::normalize;
///
/// assert_eq!(normalize("4111-1111 1111-1111").as_str(), "4111111111111111");
/// assert_eq!(normalize(None::<&str>).as_str(), "");
/// assert_eq!(normalize("41\t11").as_str(), "41\t11");
/// ```
pub fn normalize<'a>(input: impl Into<Option<&'a str>>) -> NormalizedCard {
    let stripped = input
        .into()
        .map(|s| strip(s, &SEPARATORS))
        .unwrap_or_default();
    NormalizedCard(Zeroizing::new(stripped))
}

/// Removes only ASCII spaces. Hyphens are kept.
///
/// This is the narrower cleanup the checksum stage applies.
pub(crate) fn strip_spaces(input: &str) -> Zeroizing<String> {
    Zeroizing::new(strip(input, &[' ']))
}

fn strip(input: &str, remove: &[char]) -> String {
    input.chars().filter(|c| !remove.contains(c)).collect()
}
