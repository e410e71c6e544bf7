//! Default stop word lists.
//!
//! Stop words are common words (like "the", "is", "at") that carry little
//! signal for classification and are dropped during normalization. The
//! default list matches the standard English list used by most NLP toolkits;
//! callers can supply their own list through
//! [`Normalizer::with_stop_words`](super::normalizer::Normalizer::with_stop_words).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
///
/// The classic 127-word English list. Contracted forms are absent on
/// purpose: normalization strips punctuation before stop word removal, so
/// "don't" reaches this filter as "dont".
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i",
    "me",
    "my",
    "myself",
    "we",
    "our",
    "ours",
    "ourselves",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
    "he",
    "him",
    "his",
    "himself",
    "she",
    "her",
    "hers",
    "herself",
    "it",
    "its",
    "itself",
    "they",
    "them",
    "their",
    "theirs",
    "themselves",
    "what",
    "which",
    "who",
    "whom",
    "this",
    "that",
    "these",
    "those",
    "am",
    "is",
    "are",
    "was",
    "were",
    "be",
    "been",
    "being",
    "have",
    "has",
    "had",
    "having",
    "do",
    "does",
    "did",
    "doing",
    "a",
    "an",
    "the",
    "and",
    "but",
    "if",
    "or",
    "because",
    "as",
    "until",
    "while",
    "of",
    "at",
    "by",
    "for",
    "with",
    "about",
    "against",
    "between",
    "into",
    "through",
    "during",
    "before",
    "after",
    "above",
    "below",
    "to",
    "from",
    "up",
    "down",
    "in",
    "out",
    "on",
    "off",
    "over",
    "under",
    "again",
    "further",
    "then",
    "once",
    "here",
    "there",
    "when",
    "where",
    "why",
    "how",
    "all",
    "any",
    "both",
    "each",
    "few",
    "more",
    "most",
    "other",
    "some",
    "such",
    "no",
    "nor",
    "not",
    "only",
    "own",
    "same",
    "so",
    "than",
    "too",
    "very",
    "s",
    "t",
    "can",
    "will",
    "just",
    "don",
    "should",
    "now",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_contains_common_words() {
        assert!(DEFAULT_ENGLISH_STOP_WORDS_SET.contains("the"));
        assert!(DEFAULT_ENGLISH_STOP_WORDS_SET.contains("for"));
        assert!(!DEFAULT_ENGLISH_STOP_WORDS_SET.contains("money"));
    }

    #[test]
    fn test_no_duplicates() {
        let unique: HashSet<_> = DEFAULT_ENGLISH_STOP_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_ENGLISH_STOP_WORDS.len());
    }
}
