//! Multinomial Naive Bayes classifier.
//!
//! The classifier models per-class token counts as independent multinomial
//! distributions combined via Bayes' rule. Fitting computes, per class `c`:
//!
//! ```text
//! prior(c)         = count(c) / N
//! P(token_i | c)   = (count(token_i, c) + α) / (total_tokens(c) + α·V)
//! ```
//!
//! with `α` the additive smoothing constant and `V` the vocabulary size.
//! All scoring happens in log space so long messages cannot underflow, and
//! smoothing keeps every probability strictly positive, so `log(0)` is
//! never evaluated.
//!
//! The [`TrainedModel`] produced by [`MultinomialNb::fit`] is immutable;
//! concurrent reads from multiple inference calls are safe without locking.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dataset::loader::Label;
use crate::error::{Result, SpamsiftError};
use crate::ml::vectorizer::FeatureVector;

/// Training sets at least this large shard count accumulation across the
/// rayon pool. Integer sums commute, so the result is identical to the
/// sequential path.
const PARALLEL_FIT_THRESHOLD: usize = 4096;

/// Configuration for the Naive Bayes classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NaiveBayesConfig {
    /// Additive smoothing constant (must be finite and > 0).
    pub alpha: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        NaiveBayesConfig { alpha: 1.0 }
    }
}

impl NaiveBayesConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(SpamsiftError::config(format!(
                "naive bayes: smoothing constant alpha must be finite and > 0, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Multinomial Naive Bayes trainer.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    config: NaiveBayesConfig,
}

/// Per-class count accumulator used during fitting.
#[derive(Debug, Clone)]
struct ClassCounts {
    /// Number of training examples per class.
    documents: [u64; 2],
    /// Total token count per class.
    token_totals: [u64; 2],
    /// Per-token counts per class, each of vocabulary length.
    token_counts: [Vec<u64>; 2],
}

impl ClassCounts {
    fn zero(vocabulary_size: usize) -> Self {
        ClassCounts {
            documents: [0; 2],
            token_totals: [0; 2],
            token_counts: [vec![0; vocabulary_size], vec![0; vocabulary_size]],
        }
    }

    fn add(&mut self, vector: &[u32], label: Label) {
        let class = label.code();
        self.documents[class] += 1;
        let mut added = 0u64;
        for (count, slot) in vector.iter().zip(self.token_counts[class].iter_mut()) {
            *slot += u64::from(*count);
            added += u64::from(*count);
        }
        self.token_totals[class] += added;
    }

    /// Associative merge of two accumulators.
    fn merge(mut self, other: ClassCounts) -> ClassCounts {
        for class in 0..2 {
            self.documents[class] += other.documents[class];
            self.token_totals[class] += other.token_totals[class];
            for (slot, count) in self.token_counts[class]
                .iter_mut()
                .zip(other.token_counts[class].iter())
            {
                *slot += count;
            }
        }
        self
    }
}

impl MultinomialNb {
    /// Create a trainer, validating the configuration.
    pub fn new(config: NaiveBayesConfig) -> Result<Self> {
        config.validate()?;
        Ok(MultinomialNb { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// Fit a model on vectorized training examples.
    ///
    /// All vectors must share the vocabulary length of the first one.
    /// Degenerate inputs fail: an empty training set, or a training set
    /// containing a single class (no discrimination possible).
    pub fn fit(&self, train: &[(FeatureVector, Label)]) -> Result<TrainedModel> {
        if train.is_empty() {
            return Err(SpamsiftError::empty_training_set(
                "fit requires at least one training example",
            ));
        }

        let vocabulary_size = train[0].0.len();
        for (index, (vector, _)) in train.iter().enumerate() {
            if vector.len() != vocabulary_size {
                return Err(SpamsiftError::data_format(format!(
                    "train row {index}: feature vector length {} does not match vocabulary size {vocabulary_size}",
                    vector.len()
                )));
            }
        }

        let counts = if train.len() >= PARALLEL_FIT_THRESHOLD {
            accumulate_parallel(train, vocabulary_size)
        } else {
            accumulate_sequential(train, vocabulary_size)
        };

        for label in Label::ALL {
            if counts.documents[label.code()] == 0 {
                return Err(SpamsiftError::single_class(format!(
                    "training set contains no '{label}' examples"
                )));
            }
        }

        let alpha = self.config.alpha;
        let total_documents = train.len() as f64;

        let mut class_log_prior = [0.0; 2];
        let mut feature_log_prob = [
            Vec::with_capacity(vocabulary_size),
            Vec::with_capacity(vocabulary_size),
        ];

        for class in 0..2 {
            class_log_prior[class] = (counts.documents[class] as f64 / total_documents).ln();

            let denominator =
                counts.token_totals[class] as f64 + alpha * vocabulary_size as f64;
            for &count in &counts.token_counts[class] {
                feature_log_prob[class].push((count as f64 + alpha).ln() - denominator.ln());
            }
        }

        Ok(TrainedModel {
            class_log_prior,
            feature_log_prob,
            vocabulary_size,
            alpha,
            trained_at: Utc::now(),
        })
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        MultinomialNb {
            config: NaiveBayesConfig::default(),
        }
    }
}

fn accumulate_sequential(train: &[(FeatureVector, Label)], vocabulary_size: usize) -> ClassCounts {
    let mut counts = ClassCounts::zero(vocabulary_size);
    for (vector, label) in train {
        counts.add(vector, *label);
    }
    counts
}

fn accumulate_parallel(train: &[(FeatureVector, Label)], vocabulary_size: usize) -> ClassCounts {
    train
        .par_iter()
        .fold(
            || ClassCounts::zero(vocabulary_size),
            |mut counts, (vector, label)| {
                counts.add(vector, *label);
                counts
            },
        )
        .reduce(|| ClassCounts::zero(vocabulary_size), ClassCounts::merge)
}

/// An immutable fitted Naive Bayes model.
///
/// Holds the class-conditional statistics needed to score any feature
/// vector: per-class log priors and per-token smoothed log likelihoods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    /// log(prior) per class, indexed by label code.
    class_log_prior: [f64; 2],
    /// log P(token | class) per class, each of vocabulary length.
    feature_log_prob: [Vec<f64>; 2],
    /// Vocabulary size the model was fit against.
    vocabulary_size: usize,
    /// Smoothing constant used during fitting.
    alpha: f64,
    /// When the model was fit.
    trained_at: DateTime<Utc>,
}

impl TrainedModel {
    /// Log-probability score per class for a feature vector.
    ///
    /// `score(c) = log(prior_c) + Σ_i vector[i] · log(P(token_i | c))`.
    /// An all-zero vector scores the bare priors.
    pub fn scores(&self, vector: &[u32]) -> [f64; 2] {
        let mut scores = self.class_log_prior;
        for (class, score) in scores.iter_mut().enumerate() {
            for (&count, &log_prob) in vector.iter().zip(self.feature_log_prob[class].iter()) {
                if count > 0 {
                    *score += f64::from(count) * log_prob;
                }
            }
        }
        scores
    }

    /// Predict the label for a feature vector.
    ///
    /// Never fails on a well-formed (vocabulary-length) vector; exactly
    /// equal scores resolve to the class with the lower numeric code.
    pub fn predict(&self, vector: &[u32]) -> Label {
        let scores = self.scores(vector);
        if scores[Label::Spam.code()] > scores[Label::Ham.code()] {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// log(prior) for a class.
    pub fn class_log_prior(&self, label: Label) -> f64 {
        self.class_log_prior[label.code()]
    }

    /// Smoothed log P(token | class) table for a class, in vocabulary order.
    pub fn feature_log_prob(&self, label: Label) -> &[f64] {
        &self.feature_log_prob[label.code()]
    }

    /// Vocabulary size the model was fit against.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Smoothing constant used during fitting.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// When the model was fit.
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }
}
