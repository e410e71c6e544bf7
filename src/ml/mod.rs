//! Machine learning core: vectorization, classification, evaluation.
//!
//! # Architecture
//!
//! - [`vectorizer::CountVectorizer`] — bag-of-words feature extraction
//! - [`naive_bayes::MultinomialNb`] — multinomial Naive Bayes trainer
//! - [`naive_bayes::TrainedModel`] — immutable fitted model
//! - [`metrics`] — confusion-matrix evaluation
//! - [`pipeline::Pipeline`] — the composed train/classify service
//!
//! Fitting is a one-shot blocking computation; the fitted vocabulary and
//! model are read-only afterwards, so inference can be shared freely across
//! threads.

pub mod metrics;
pub mod naive_bayes;
pub mod pipeline;
pub mod vectorizer;

pub use metrics::{ClassMetrics, ConfusionMatrix, Metrics, evaluate};
pub use naive_bayes::{MultinomialNb, NaiveBayesConfig, TrainedModel};
pub use pipeline::{Pipeline, PipelineConfig, TrainingReport};
pub use vectorizer::{CountVectorizer, FeatureVector};
