use regex::Regex;
use std::fmt;
use std::num::NonZeroU32;

/// Digits or a spelled-out number from one to five, leftmost match wins
const QUANTITY_PATTERN: &str = r"[0-9]+|one|two|three|four|five";

/// Spelled-out quantities understood in an utterance
const NUMBER_WORDS: [(&str, u32); 5] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

/// Number of units ordered, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Quantity used when the utterance doesn't state one
    pub const DEFAULT: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Underlying count
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finds the first quantity expression in an utterance
#[derive(Debug, Clone)]
pub struct QuantityExtractor {
    pattern: Regex,
}

impl QuantityExtractor {
    /// Compile the quantity pattern
    ///
    /// # Errors
    /// Returns error if the pattern fails to compile
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(QUANTITY_PATTERN)?,
        })
    }

    /// Extract the quantity stated in `utterance`
    ///
    /// Only the first quantity expression counts. Anything unparseable,
    /// zero, or absent yields [`Quantity::DEFAULT`].
    #[must_use]
    pub fn extract(&self, utterance: &str) -> Quantity {
        let lower = utterance.to_lowercase();
        let Some(found) = self.pattern.find(&lower) else {
            return Quantity::DEFAULT;
        };
        let token = found.as_str();

        let value = NUMBER_WORDS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, n)| *n)
            .or_else(|| token.parse::<u32>().ok());

        value.and_then(Quantity::new).unwrap_or_else(|| {
            tracing::debug!(token = token, "unusable quantity, using default");
            Quantity::DEFAULT
        })
    }
}
