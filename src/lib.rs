//! # spamsift
//!
//! A small supervised text-classification pipeline that labels short
//! free-text messages as spam or ham using a bag-of-words representation
//! and a multinomial Naive Bayes classifier.
//!
//! ## Features
//!
//! - Deterministic text normalization (lowercase, digit/punctuation
//!   stripping, stop word removal)
//! - Vocabulary-based count vectorization with a frozen term index
//! - Reproducible seeded train/test splitting
//! - Log-space multinomial Naive Bayes with additive smoothing
//! - Confusion-matrix evaluation (accuracy, per-class P/R/F1, macro averages)
//! - Single-message inference through an explicit [`ml::pipeline::Pipeline`]
//!
//! ## Example
//!
//! ```
//! use spamsift::prelude::*;
//!
//! # fn main() -> spamsift::error::Result<()> {
//! let mut samples = Vec::new();
//! for _ in 0..5 {
//!     samples.push((Label::Spam, "win money now".to_string()));
//!     samples.push((Label::Ham, "meet for lunch tomorrow".to_string()));
//! }
//!
//! let mut pipeline = Pipeline::new(PipelineConfig::default())?;
//! let report = pipeline.fit(&samples)?;
//! println!("holdout accuracy: {:.4}", report.metrics.accuracy);
//!
//! assert_eq!(pipeline.classify("win money")?, Label::Spam);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod ml;

/// Commonly used types.
pub mod prelude {
    pub use crate::analysis::normalizer::Normalizer;
    pub use crate::dataset::loader::{
        DatasetLoader, Label, LabelTable, LoaderConfig, MalformedRowPolicy, Row,
    };
    pub use crate::dataset::split::train_test_split;
    pub use crate::error::{Result, SpamsiftError};
    pub use crate::ml::metrics::{ConfusionMatrix, Metrics, evaluate};
    pub use crate::ml::naive_bayes::{MultinomialNb, NaiveBayesConfig, TrainedModel};
    pub use crate::ml::pipeline::{Pipeline, PipelineConfig, TrainingReport};
    pub use crate::ml::vectorizer::{CountVectorizer, FeatureVector};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
