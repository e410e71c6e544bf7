//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpamsiftArgs};
use crate::dataset::loader::Label;
use crate::error::Result;
use crate::ml::metrics::Metrics;

/// Result structure for training runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainOutput {
    pub total_examples: usize,
    pub skipped_rows: usize,
    pub train_examples: usize,
    pub test_examples: usize,
    pub vocabulary_size: usize,
    pub metrics: Metrics,
    pub duration_ms: u64,
    pub model_path: Option<String>,
}

/// Result structure for single-message classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyOutput {
    pub label: String,
    /// Log-probability score per class, indexed by label code (ham, spam).
    pub scores: [f64; 2],
}

/// Result structure for model inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectOutput {
    pub vocabulary_size: usize,
    pub alpha: f64,
    pub trained_at: String,
    /// Highest-likelihood tokens per class, with P(token | class).
    pub top_tokens: TopTokens,
}

/// Top vocabulary tokens per class.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopTokens {
    pub ham: Vec<(String, f64)>,
    pub spam: Vec<(String, f64)>,
}

/// Render a serializable result in the format the user asked for.
pub fn print_output<T: Serialize>(args: &SpamsiftArgs, value: &T, human: String) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => println!("{human}"),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// Human-readable rendering of a metrics block.
pub fn format_metrics(metrics: &Metrics) -> String {
    let mut out = String::new();
    out.push_str(&format!("accuracy: {:.4}\n", metrics.accuracy));
    out.push_str(&format!(
        "{:<8} {:>10} {:>10} {:>10} {:>10}\n",
        "class", "precision", "recall", "f1", "support"
    ));
    for label in Label::ALL {
        let class = metrics.class(label);
        out.push_str(&format!(
            "{:<8} {:>10.4} {:>10.4} {:>10.4} {:>10}\n",
            label.as_str(),
            class.precision,
            class.recall,
            class.f1,
            class.support
        ));
    }
    out.push_str(&format!(
        "{:<8} {:>10.4} {:>10.4} {:>10.4}\n",
        "macro", metrics.macro_precision, metrics.macro_recall, metrics.macro_f1
    ));
    out.push_str(&format!(
        "confusion: ham→ham {}, ham→spam {}, spam→ham {}, spam→spam {}",
        metrics.confusion.count(Label::Ham, Label::Ham),
        metrics.confusion.count(Label::Ham, Label::Spam),
        metrics.confusion.count(Label::Spam, Label::Ham),
        metrics.confusion.count(Label::Spam, Label::Spam),
    ));
    out
}

impl TrainOutput {
    /// Human-readable rendering.
    pub fn to_human(&self) -> String {
        let mut out = format!(
            "trained on {} examples ({} train / {} test, {} skipped) in {} ms\nvocabulary: {} terms\n",
            self.total_examples,
            self.train_examples,
            self.test_examples,
            self.skipped_rows,
            self.duration_ms,
            self.vocabulary_size
        );
        out.push_str(&format_metrics(&self.metrics));
        if let Some(path) = &self.model_path {
            out.push_str(&format!("\nmodel saved to {path}"));
        }
        out
    }
}

impl ClassifyOutput {
    /// Human-readable rendering.
    pub fn to_human(&self) -> String {
        format!(
            "{} (log-scores: ham {:.4}, spam {:.4})",
            self.label,
            self.scores[Label::Ham.code()],
            self.scores[Label::Spam.code()]
        )
    }
}

impl InspectOutput {
    /// Human-readable rendering.
    pub fn to_human(&self) -> String {
        let mut out = format!(
            "vocabulary: {} terms, alpha: {}, trained at: {}\n",
            self.vocabulary_size, self.alpha, self.trained_at
        );
        for (name, tokens) in [("spam", &self.top_tokens.spam), ("ham", &self.top_tokens.ham)] {
            out.push_str(&format!("top {name} tokens:\n"));
            for (token, probability) in tokens {
                out.push_str(&format!("  {token:<20} {probability:.6}\n"));
            }
        }
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::metrics::ConfusionMatrix;

    #[test]
    fn test_format_metrics_contains_classes() {
        let mut confusion = ConfusionMatrix::new();
        confusion.record(Label::Ham, Label::Ham);
        confusion.record(Label::Spam, Label::Spam);
        let metrics = Metrics::from_confusion(confusion);

        let text = format_metrics(&metrics);
        assert!(text.contains("accuracy: 1.0000"));
        assert!(text.contains("ham"));
        assert!(text.contains("spam"));
    }

    #[test]
    fn test_classify_output_human() {
        let output = ClassifyOutput {
            label: "spam".to_string(),
            scores: [-12.5, -3.25],
        };
        let text = output.to_human();
        assert!(text.starts_with("spam"));
        assert!(text.contains("-3.2500"));
    }
}
