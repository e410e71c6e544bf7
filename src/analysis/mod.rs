//! Text analysis for the classification pipeline.
//!
//! This module provides the deterministic normalization applied to every
//! message before vectorization, plus the default word lists it consumes.
//!
//! # Pipeline position
//!
//! ```text
//! Raw Text → Normalizer → Cleaned Text → CountVectorizer → FeatureVector
//! ```

pub mod normalizer;
pub mod stopwords;

pub use normalizer::Normalizer;
pub use stopwords::{DEFAULT_ENGLISH_STOP_WORDS, DEFAULT_ENGLISH_STOP_WORDS_SET};
