//! Bag-of-words count vectorizer.
//!
//! The [`CountVectorizer`] builds a fixed term index (the vocabulary) from a
//! training corpus and maps any text onto a fixed-length vector of token
//! counts. Counts, not presence flags: the downstream classifier models
//! token frequency.
//!
//! The vocabulary is frozen after [`fit`](CountVectorizer::fit); tokens
//! unseen at fit time are silently ignored by
//! [`transform`](CountVectorizer::transform).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamsiftError};

/// A fixed-length vector of per-token occurrence counts.
///
/// Length equals the vocabulary size of the vectorizer that produced it.
pub type FeatureVector = Vec<u32>;

/// Vocabulary-based count vectorizer.
///
/// Index assignment is first-seen order over the corpus, so re-fitting on
/// the same corpus in the same order reproduces the identical vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountVectorizer {
    /// Vocabulary: token -> column index.
    vocabulary: AHashMap<String, usize>,
    /// Tokens in index order (the inverse of `vocabulary`).
    terms: Vec<String>,
}

impl CountVectorizer {
    /// Create an unfitted vectorizer with an empty vocabulary.
    pub fn new() -> Self {
        CountVectorizer::default()
    }

    /// Build the vocabulary from a corpus of (already normalized) texts.
    ///
    /// Each distinct whitespace-delimited token gets a stable integer index
    /// in first-seen order. Any previous vocabulary is discarded. An empty
    /// corpus yields an empty vocabulary; every transform then produces a
    /// zero-length vector, a degenerate case callers should avoid.
    pub fn fit(&mut self, corpus: &[String]) {
        let mut vocabulary = AHashMap::new();
        let mut terms = Vec::new();

        for text in corpus {
            for token in text.split_whitespace() {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.to_string(), terms.len());
                    terms.push(token.to_string());
                }
            }
        }

        self.vocabulary = vocabulary;
        self.terms = terms;
    }

    /// Map a (already normalized) text onto a count vector.
    ///
    /// The result always has length [`vocabulary_size`](Self::vocabulary_size);
    /// out-of-vocabulary tokens are ignored.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts = vec![0u32; self.terms.len()];
        for token in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                counts[index] += 1;
            }
        }
        counts
    }

    /// Check that the vocabulary map and the term list agree.
    ///
    /// A vectorizer built by [`fit`](Self::fit) always passes; this guards
    /// against inconsistent deserialized state (an index out of bounds or
    /// pointing at the wrong term), which would otherwise panic inside
    /// [`transform`](Self::transform).
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.terms.len() {
            return Err(SpamsiftError::data_format(format!(
                "vectorizer: vocabulary has {} entries but term list has {}",
                self.vocabulary.len(),
                self.terms.len()
            )));
        }
        for (token, &index) in &self.vocabulary {
            match self.terms.get(index) {
                Some(term) if term == token => {}
                _ => {
                    return Err(SpamsiftError::data_format(format!(
                        "vectorizer: token '{token}' maps to index {index}, which does not hold it"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of distinct tokens in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Column index of a token, if present in the vocabulary.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }

    /// Token at a column index, if in range.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All vocabulary tokens in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
