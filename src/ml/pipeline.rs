//! End-to-end classification pipeline.
//!
//! The [`Pipeline`] owns the fitted state explicitly — normalizer,
//! vocabulary, and trained model — instead of hiding it in module-level
//! globals. It is constructed unfitted, trained with [`Pipeline::fit`]
//! (which runs the full flow: normalize → build vocabulary → vectorize →
//! split → train → evaluate), and then answers [`Pipeline::classify`] calls
//! for single messages.
//!
//! A failed `fit` never clobbers previously fitted state: the new
//! vocabulary and model replace the old ones only after training and
//! holdout evaluation both succeed.
//!
//! # Examples
//!
//! ```
//! use spamsift::dataset::loader::Label;
//! use spamsift::ml::pipeline::{Pipeline, PipelineConfig};
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
//! assert!(report.metrics.accuracy > 0.0);
//!
//! assert_eq!(pipeline.classify("win money")?, Label::Spam);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::dataset::loader::Label;
use crate::dataset::split::train_test_split;
use crate::error::{Result, SpamsiftError};
use crate::ml::metrics::{Metrics, evaluate};
use crate::ml::naive_bayes::{MultinomialNb, NaiveBayesConfig, TrainedModel};
use crate::ml::vectorizer::CountVectorizer;

/// Configuration for a training run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fraction of examples used for training, in (0, 1) exclusive.
    pub train_fraction: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
    /// Additive smoothing constant for the classifier.
    pub alpha: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            train_fraction: 0.8,
            seed: 42,
            alpha: 1.0,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(SpamsiftError::config(format!(
                "pipeline: train_fraction must be in (0, 1) exclusive, got {}",
                self.train_fraction
            )));
        }
        NaiveBayesConfig { alpha: self.alpha }.validate()
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Total labelled examples seen.
    pub total_examples: usize,
    /// Examples used for fitting.
    pub train_examples: usize,
    /// Examples held out for evaluation.
    pub test_examples: usize,
    /// Distinct tokens in the fitted vocabulary.
    pub vocabulary_size: usize,
    /// Holdout evaluation metrics.
    pub metrics: Metrics,
}

/// Serialized form of a fitted pipeline.
///
/// The on-disk format is a single JSON document; the host owns nothing but
/// this file, so vocabulary, model, and the normalizer word lists all travel
/// together.
#[derive(Debug, Serialize, Deserialize)]
struct SavedPipeline {
    config: PipelineConfig,
    stop_words: Vec<String>,
    punctuation: String,
    vectorizer: CountVectorizer,
    model: TrainedModel,
}

/// A spam/ham classification pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
    vectorizer: CountVectorizer,
    model: Option<TrainedModel>,
}

impl Pipeline {
    /// Create an unfitted pipeline, validating the configuration eagerly.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Pipeline {
            config,
            normalizer: Normalizer::new(),
            vectorizer: CountVectorizer::new(),
            model: None,
        })
    }

    /// Replace the normalizer (custom stop word or punctuation sets).
    ///
    /// Discards any fitted state, since vectors produced under a different
    /// normalizer are not comparable.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self.vectorizer = CountVectorizer::new();
        self.model = None;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Whether `fit` has completed successfully.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// The fitted model, if any.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// Train on labelled raw-text samples and evaluate on the holdout.
    ///
    /// Runs the full flow: normalize every message, build the vocabulary
    /// over the whole corpus, vectorize, split with the configured seed,
    /// fit the classifier on the training partition, and evaluate on the
    /// rest. On success the pipeline's fitted state is replaced atomically.
    pub fn fit(&mut self, samples: &[(Label, String)]) -> Result<TrainingReport> {
        if samples.is_empty() {
            return Err(SpamsiftError::empty_training_set(
                "pipeline: fit requires at least one labelled sample",
            ));
        }

        log::info!("normalizing {} messages", samples.len());
        let normalized: Vec<String> = samples
            .iter()
            .map(|(_, text)| self.normalizer.normalize(text))
            .collect();

        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&normalized);
        log::info!("fitted vocabulary of {} terms", vectorizer.vocabulary_size());

        let pairs: Vec<_> = normalized
            .iter()
            .zip(samples.iter())
            .map(|(text, (label, _))| (vectorizer.transform(text), *label))
            .collect();

        let (train, test) =
            train_test_split(pairs, self.config.train_fraction, self.config.seed)?;
        log::info!(
            "training on {} examples, holding out {}",
            train.len(),
            test.len()
        );

        let trainer = MultinomialNb::new(NaiveBayesConfig {
            alpha: self.config.alpha,
        })?;
        let model = trainer.fit(&train)?;
        let metrics = evaluate(&model, &test)?;
        log::info!(
            "holdout accuracy {:.4}, macro F1 {:.4}",
            metrics.accuracy,
            metrics.macro_f1
        );

        let report = TrainingReport {
            total_examples: samples.len(),
            train_examples: train.len(),
            test_examples: test.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            metrics,
        };

        self.vectorizer = vectorizer;
        self.model = Some(model);
        Ok(report)
    }

    /// Classify a single raw message.
    ///
    /// Fails with `NotFitted` before a successful [`fit`](Self::fit).
    pub fn classify(&self, raw_text: &str) -> Result<Label> {
        Ok(self.classify_scored(raw_text)?.0)
    }

    /// Classify a single raw message, returning the per-class log scores
    /// alongside the label (indexed by label code).
    pub fn classify_scored(&self, raw_text: &str) -> Result<(Label, [f64; 2])> {
        let model = self.model.as_ref().ok_or_else(|| {
            SpamsiftError::not_fitted("classify called before the pipeline was fitted")
        })?;

        let normalized = self.normalizer.normalize(raw_text);
        let vector = self.vectorizer.transform(&normalized);
        Ok((model.predict(&vector), model.scores(&vector)))
    }

    /// Persist the fitted pipeline as a JSON document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let model = self.model.as_ref().ok_or_else(|| {
            SpamsiftError::not_fitted("save called before the pipeline was fitted")
        })?;

        let saved = SavedPipeline {
            config: self.config,
            stop_words: self.normalizer.stop_words(),
            punctuation: self.normalizer.punctuation().into_iter().collect(),
            vectorizer: self.vectorizer.clone(),
            model: model.clone(),
        };

        let json = serde_json::to_string_pretty(&saved)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously saved pipeline.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let saved: SavedPipeline = serde_json::from_str(&content)?;
        saved.config.validate()?;
        saved.vectorizer.validate()?;

        let normalizer = Normalizer::new()
            .with_stop_words(saved.stop_words)
            .with_punctuation(saved.punctuation.chars());

        Ok(Pipeline {
            config: saved.config,
            normalizer,
            vectorizer: saved.vectorizer,
            model: Some(saved.model),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_samples() -> Vec<(Label, String)> {
        let mut samples = Vec::new();
        for _ in 0..5 {
            samples.push((Label::Spam, "win money now".to_string()));
            samples.push((Label::Ham, "meet for lunch tomorrow".to_string()));
        }
        samples
    }

    #[test]
    fn test_invalid_config_rejected() {
        for train_fraction in [0.0, 1.0, -0.5] {
            let config = PipelineConfig {
                train_fraction,
                ..PipelineConfig::default()
            };
            assert!(matches!(
                Pipeline::new(config),
                Err(SpamsiftError::Config(_))
            ));
        }

        let config = PipelineConfig {
            alpha: 0.0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            Pipeline::new(config),
            Err(SpamsiftError::Config(_))
        ));
    }

    #[test]
    fn test_classify_before_fit() {
        let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        let err = pipeline.classify("any message").unwrap_err();
        assert!(matches!(err, SpamsiftError::NotFitted(_)));
    }

    #[test]
    fn test_fit_empty_samples() {
        let mut pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        let err = pipeline.fit(&[]).unwrap_err();
        assert!(matches!(err, SpamsiftError::EmptyTrainingSet(_)));
    }

    #[test]
    fn test_fit_and_classify() {
        let mut pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        let report = pipeline.fit(&training_samples()).unwrap();

        assert_eq!(report.total_examples, 10);
        assert_eq!(report.train_examples + report.test_examples, 10);
        assert!(pipeline.is_fitted());

        assert_eq!(pipeline.classify("win money").unwrap(), Label::Spam);
        assert_eq!(pipeline.classify("lunch tomorrow").unwrap(), Label::Ham);
    }

    #[test]
    fn test_failed_fit_preserves_previous_model() {
        let mut pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        pipeline.fit(&training_samples()).unwrap();

        // All-spam corpus: classifier fit fails with SingleClass.
        let bad: Vec<_> = (0..10)
            .map(|_| (Label::Spam, "win money".to_string()))
            .collect();
        let err = pipeline.fit(&bad).unwrap_err();
        assert!(matches!(err, SpamsiftError::SingleClass(_)));

        // Previous fitted state still answers.
        assert_eq!(pipeline.classify("win money").unwrap(), Label::Spam);
    }

    #[test]
    fn test_save_before_fit() {
        let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        let err = pipeline.save(Path::new("/tmp/never-written.json")).unwrap_err();
        assert!(matches!(err, SpamsiftError::NotFitted(_)));
    }

    #[test]
    fn test_load_rejects_corrupt_vocabulary() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pipeline.json");

        let mut pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        pipeline.fit(&training_samples()).unwrap();
        pipeline.save(&path).unwrap();

        // Point a vocabulary entry past the end of the term list.
        let mut saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let vocabulary = saved["vectorizer"]["vocabulary"].as_object_mut().unwrap();
        let token = vocabulary.keys().next().unwrap().clone();
        vocabulary[&token] = serde_json::json!(9999);
        std::fs::write(&path, serde_json::to_string(&saved).unwrap()).unwrap();

        let err = Pipeline::load(&path).unwrap_err();
        assert!(matches!(err, SpamsiftError::DataFormat(_)));
    }

    #[test]
    fn test_with_normalizer_discards_fitted_state() {
        let mut pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
        pipeline.fit(&training_samples()).unwrap();

        let pipeline = pipeline.with_normalizer(Normalizer::new().with_stop_words(["win"]));
        assert!(!pipeline.is_fitted());
    }
}
