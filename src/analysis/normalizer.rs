//! Text normalizer implementation.
//!
//! The [`Normalizer`] is the first stage of the classification pipeline. It
//! applies a fixed chain of transforms to raw message text:
//!
//! ```text
//! Raw Text → lowercase → strip digits → strip punctuation
//!          → whitespace split → stop word removal → rejoin
//! ```
//!
//! Each step is total — there is no input that can make normalization fail,
//! and the empty string is a valid result (empty or all-stop-word input).
//! Normalization is pure and deterministic: the output depends only on the
//! input text and the configured word lists, never on corpus state.
//!
//! # Examples
//!
//! ```
//! use spamsift::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! assert_eq!(
//!     normalizer.normalize("WIN £1000 now!!! Call 0800-123"),
//!     "win £ call"
//! );
//! assert_eq!(normalizer.normalize("This is the..."), "");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::stopwords::DEFAULT_ENGLISH_STOP_WORDS_SET;

/// Default punctuation characters stripped during normalization.
///
/// The standard ASCII punctuation set.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A deterministic text-to-token normalizer.
///
/// The transform chain is fixed; the stop word and punctuation sets are
/// opaque configuration, defaulting to the standard English stop word list
/// and the ASCII punctuation set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Words dropped after tokenization.
    stop_words: Arc<HashSet<String>>,
    /// Characters removed before tokenization.
    punctuation: Arc<HashSet<char>>,
}

impl Normalizer {
    /// Create a normalizer with the default English stop words and ASCII
    /// punctuation.
    pub fn new() -> Self {
        Normalizer {
            stop_words: Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
            punctuation: Arc::new(DEFAULT_PUNCTUATION.chars().collect()),
        }
    }

    /// Replace the stop word set.
    ///
    /// # Examples
    ///
    /// ```
    /// use spamsift::analysis::normalizer::Normalizer;
    ///
    /// let normalizer = Normalizer::new().with_stop_words(["free"]);
    /// assert_eq!(normalizer.normalize("free the money"), "the money");
    /// ```
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Arc::new(words.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the punctuation set.
    pub fn with_punctuation<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.punctuation = Arc::new(chars.into_iter().collect());
        self
    }

    /// Check whether a token is in the configured stop word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// The configured stop words, in unspecified order.
    pub fn stop_words(&self) -> Vec<String> {
        self.stop_words.iter().cloned().collect()
    }

    /// The configured punctuation characters, in unspecified order.
    pub fn punctuation(&self) -> Vec<char> {
        self.punctuation.iter().copied().collect()
    }

    /// Normalize raw text into a cleaned, space-separated token string.
    ///
    /// Always succeeds; returns the empty string for empty or all-stop-word
    /// input. Idempotent: normalizing already-normalized text is a no-op.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_numeric() && !self.punctuation.contains(c))
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
