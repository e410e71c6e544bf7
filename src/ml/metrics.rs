//! Holdout evaluation metrics.
//!
//! Everything derives from the 2×2 confusion matrix over the held-out
//! predictions: accuracy, per-class precision/recall/F1, and their
//! unweighted macro averages. The structs here are plain values for a
//! reporting surface (CLI, dashboard) to format; no formatting lives in
//! this module.

use serde::{Deserialize, Serialize};

use crate::dataset::loader::Label;
use crate::error::{Result, SpamsiftError};
use crate::ml::naive_bayes::TrainedModel;
use crate::ml::vectorizer::FeatureVector;

/// Confusion counts over the two classes.
///
/// `counts[actual][predicted]`, indexed by label code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; 2]; 2],
}

impl ConfusionMatrix {
    /// Create an all-zero matrix.
    pub fn new() -> Self {
        ConfusionMatrix::default()
    }

    /// Record one prediction.
    pub fn record(&mut self, actual: Label, predicted: Label) {
        self.counts[actual.code()][predicted.code()] += 1;
    }

    /// Count of examples with the given actual and predicted labels.
    pub fn count(&self, actual: Label, predicted: Label) -> usize {
        self.counts[actual.code()][predicted.code()]
    }

    /// Correctly predicted examples of this class.
    pub fn true_positives(&self, label: Label) -> usize {
        self.counts[label.code()][label.code()]
    }

    /// Examples of other classes predicted as this class.
    pub fn false_positives(&self, label: Label) -> usize {
        Label::ALL
            .iter()
            .filter(|&&actual| actual != label)
            .map(|&actual| self.count(actual, label))
            .sum()
    }

    /// Examples of this class predicted as another class.
    pub fn false_negatives(&self, label: Label) -> usize {
        Label::ALL
            .iter()
            .filter(|&&predicted| predicted != label)
            .map(|&predicted| self.count(label, predicted))
            .sum()
    }

    /// Number of examples whose actual class is this label.
    pub fn support(&self, label: Label) -> usize {
        Label::ALL
            .iter()
            .map(|&predicted| self.count(label, predicted))
            .sum()
    }

    /// Total number of recorded examples.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Total number of correct predictions.
    pub fn correct(&self) -> usize {
        Label::ALL.iter().map(|&l| self.true_positives(l)).sum()
    }
}

/// Precision/recall/F1 for one class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// tp / (tp + fp); 0.0 when nothing was predicted as this class.
    pub precision: f64,
    /// tp / (tp + fn); 0.0 when the class has no test examples.
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0.0 when both are 0.
    pub f1: f64,
    /// Number of test examples whose actual class is this one.
    pub support: usize,
}

impl ClassMetrics {
    fn from_confusion(confusion: &ConfusionMatrix, label: Label) -> Self {
        let tp = confusion.true_positives(label) as f64;
        let fp = confusion.false_positives(label) as f64;
        let fn_ = confusion.false_negatives(label) as f64;

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        ClassMetrics {
            precision,
            recall,
            f1,
            support: confusion.support(label),
        }
    }
}

/// Full evaluation result for a held-out test set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of test examples predicted correctly.
    pub accuracy: f64,
    /// Per-class metrics, indexed by label code (ham, spam).
    pub per_class: [ClassMetrics; 2],
    /// Unweighted mean precision across classes.
    pub macro_precision: f64,
    /// Unweighted mean recall across classes.
    pub macro_recall: f64,
    /// Unweighted mean F1 across classes.
    pub macro_f1: f64,
    /// Raw confusion counts.
    pub confusion: ConfusionMatrix,
}

impl Metrics {
    /// Derive all metrics from a confusion matrix.
    pub fn from_confusion(confusion: ConfusionMatrix) -> Self {
        let per_class =
            Label::ALL.map(|label| ClassMetrics::from_confusion(&confusion, label));

        let total = confusion.total();
        let accuracy = if total > 0 {
            confusion.correct() as f64 / total as f64
        } else {
            0.0
        };

        let class_count = Label::ALL.len() as f64;
        Metrics {
            accuracy,
            macro_precision: per_class.iter().map(|m| m.precision).sum::<f64>() / class_count,
            macro_recall: per_class.iter().map(|m| m.recall).sum::<f64>() / class_count,
            macro_f1: per_class.iter().map(|m| m.f1).sum::<f64>() / class_count,
            per_class,
            confusion,
        }
    }

    /// Metrics for one class.
    pub fn class(&self, label: Label) -> &ClassMetrics {
        &self.per_class[label.code()]
    }
}

/// Evaluate a fitted model on held-out vectorized examples.
///
/// Fails on an empty test set — there is nothing to measure, and silently
/// returning zeros would be indistinguishable from a terrible model.
pub fn evaluate(model: &TrainedModel, test: &[(FeatureVector, Label)]) -> Result<Metrics> {
    if test.is_empty() {
        return Err(SpamsiftError::empty_test_set(
            "evaluate requires at least one test example",
        ));
    }

    let mut confusion = ConfusionMatrix::new();
    for (vector, actual) in test {
        confusion.record(*actual, model.predict(vector));
    }

    Ok(Metrics::from_confusion(confusion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::naive_bayes::MultinomialNb;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let mut confusion = ConfusionMatrix::new();
        confusion.record(Label::Spam, Label::Spam);
        confusion.record(Label::Spam, Label::Ham);
        confusion.record(Label::Ham, Label::Ham);

        assert_eq!(confusion.true_positives(Label::Spam), 1);
        assert_eq!(confusion.false_negatives(Label::Spam), 1);
        assert_eq!(confusion.false_positives(Label::Ham), 1);
        assert_eq!(confusion.support(Label::Spam), 2);
        assert_eq!(confusion.total(), 3);
        assert_eq!(confusion.correct(), 2);
    }

    #[test]
    fn test_metrics_hand_computed() {
        // 3 spam correct, 1 ham misclassified as spam, 4 ham correct.
        let mut confusion = ConfusionMatrix::new();
        for _ in 0..3 {
            confusion.record(Label::Spam, Label::Spam);
        }
        confusion.record(Label::Ham, Label::Spam);
        for _ in 0..4 {
            confusion.record(Label::Ham, Label::Ham);
        }

        let metrics = Metrics::from_confusion(confusion);

        assert_close(metrics.accuracy, 7.0 / 8.0);

        let spam = metrics.class(Label::Spam);
        assert_close(spam.precision, 3.0 / 4.0);
        assert_close(spam.recall, 1.0);
        assert_close(spam.f1, 2.0 * 0.75 / 1.75);
        assert_eq!(spam.support, 3);

        let ham = metrics.class(Label::Ham);
        assert_close(ham.precision, 1.0);
        assert_close(ham.recall, 4.0 / 5.0);
        assert_close(ham.f1, 2.0 * 0.8 / 1.8);
        assert_eq!(ham.support, 5);

        assert_close(metrics.macro_precision, (0.75 + 1.0) / 2.0);
        assert_close(metrics.macro_recall, (1.0 + 0.8) / 2.0);
        assert_close(metrics.macro_f1, (2.0 * 0.75 / 1.75 + 2.0 * 0.8 / 1.8) / 2.0);
    }

    #[test]
    fn test_zero_denominators_are_zero() {
        // Everything predicted ham: spam precision has an empty denominator.
        let mut confusion = ConfusionMatrix::new();
        confusion.record(Label::Ham, Label::Ham);
        confusion.record(Label::Spam, Label::Ham);

        let metrics = Metrics::from_confusion(confusion);
        let spam = metrics.class(Label::Spam);
        assert_eq!(spam.precision, 0.0);
        assert_eq!(spam.recall, 0.0);
        assert_eq!(spam.f1, 0.0);
    }

    #[test]
    fn test_evaluate_empty_test_set() {
        let train = vec![
            (vec![1, 0], Label::Spam),
            (vec![0, 1], Label::Ham),
        ];
        let model = MultinomialNb::default().fit(&train).unwrap();

        let err = evaluate(&model, &[]).unwrap_err();
        assert!(matches!(err, SpamsiftError::EmptyTestSet(_)));
    }

    #[test]
    fn test_evaluate_perfect_model() {
        let train = vec![
            (vec![3, 0], Label::Spam),
            (vec![0, 3], Label::Ham),
        ];
        let model = MultinomialNb::default().fit(&train).unwrap();

        let test = vec![
            (vec![2, 0], Label::Spam),
            (vec![0, 2], Label::Ham),
        ];
        let metrics = evaluate(&model, &test).unwrap();
        assert_close(metrics.accuracy, 1.0);
        assert_close(metrics.macro_f1, 1.0);
    }
}
