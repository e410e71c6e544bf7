//! Command execution logic for the spamsift CLI.

use std::fs;
use std::time::Instant;

use crate::cli::args::{ClassifyArgs, Command, InspectArgs, SpamsiftArgs, TrainArgs};
use crate::cli::output::{ClassifyOutput, InspectOutput, TopTokens, TrainOutput, print_output};
use crate::dataset::loader::{DatasetLoader, Label, LoaderConfig, MalformedRowPolicy, Row};
use crate::error::Result;
use crate::ml::pipeline::{Pipeline, PipelineConfig};

/// Execute the parsed command.
pub fn execute_command(args: SpamsiftArgs) -> Result<()> {
    match args.command.clone() {
        Command::Train(train_args) => execute_train(&args, train_args),
        Command::Classify(classify_args) => execute_classify(&args, classify_args),
        Command::Inspect(inspect_args) => execute_inspect(&args, inspect_args),
    }
}

fn execute_train(args: &SpamsiftArgs, train_args: TrainArgs) -> Result<()> {
    let started = Instant::now();

    let content = fs::read_to_string(&train_args.data_file)?;
    let rows: Vec<Row> = serde_json::from_str(&content)?;

    let loader = DatasetLoader::new(LoaderConfig {
        label_column: train_args.label_column,
        text_columns: train_args.text_columns,
        malformed_rows: if train_args.skip_malformed {
            MalformedRowPolicy::Skip
        } else {
            MalformedRowPolicy::Fail
        },
        ..LoaderConfig::default()
    })?;
    let samples = loader.load(&rows)?;
    let skipped_rows = rows.len() - samples.len();

    let mut pipeline = Pipeline::new(PipelineConfig {
        train_fraction: train_args.train_fraction,
        seed: train_args.seed,
        alpha: train_args.alpha,
    })?;
    let report = pipeline.fit(&samples)?;

    let model_path = match &train_args.model {
        Some(path) => {
            pipeline.save(path)?;
            Some(path.display().to_string())
        }
        None => None,
    };

    let output = TrainOutput {
        total_examples: report.total_examples,
        skipped_rows,
        train_examples: report.train_examples,
        test_examples: report.test_examples,
        vocabulary_size: report.vocabulary_size,
        metrics: report.metrics,
        duration_ms: started.elapsed().as_millis() as u64,
        model_path,
    };
    let human = output.to_human();
    print_output(args, &output, human)
}

fn execute_classify(args: &SpamsiftArgs, classify_args: ClassifyArgs) -> Result<()> {
    let pipeline = Pipeline::load(&classify_args.model)?;
    let (label, scores) = pipeline.classify_scored(&classify_args.message)?;

    let output = ClassifyOutput {
        label: label.to_string(),
        scores,
    };
    let human = output.to_human();
    print_output(args, &output, human)
}

fn execute_inspect(args: &SpamsiftArgs, inspect_args: InspectArgs) -> Result<()> {
    let pipeline = Pipeline::load(&inspect_args.model)?;
    // Load never returns an unfitted pipeline, so the model is present.
    let model = pipeline
        .model()
        .expect("loaded pipeline always carries a model");

    let top_for = |label: Label| -> Vec<(String, f64)> {
        let mut tokens: Vec<(String, f64)> = pipeline
            .vectorizer()
            .terms()
            .iter()
            .zip(model.feature_log_prob(label).iter())
            .map(|(term, log_prob)| (term.clone(), log_prob.exp()))
            .collect();
        tokens.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        tokens.truncate(inspect_args.top);
        tokens
    };

    let output = InspectOutput {
        vocabulary_size: model.vocabulary_size(),
        alpha: model.alpha(),
        trained_at: model.trained_at().to_rfc3339(),
        top_tokens: TopTokens {
            ham: top_for(Label::Ham),
            spam: top_for(Label::Spam),
        },
    };
    let human = output.to_human();
    print_output(args, &output, human)
}
