//! Command line argument parsing for the spamsift CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// spamsift - a small supervised spam/ham text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "spamsift")]
#[command(about = "Train and run a spam/ham message classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamsiftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamsiftArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier from labelled rows and report holdout metrics
    Train(TrainArgs),

    /// Classify a single message with a saved model
    Classify(ClassifyArgs),

    /// Show statistics of a saved model
    Inspect(InspectArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training data file: a JSON array of column-name → string objects
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Where to save the fitted pipeline (JSON)
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub model: Option<PathBuf>,

    /// Column holding the raw label value
    #[arg(long, default_value = "label")]
    pub label_column: String,

    /// Text-bearing column (repeat for multiple columns)
    #[arg(long = "text-column", default_value = "message")]
    pub text_columns: Vec<String>,

    /// Fraction of examples used for training, in (0, 1) exclusive
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Additive smoothing constant
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Skip rows with unrecognized labels instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

/// Arguments for classifying a single message
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Saved pipeline file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Message text to classify
    #[arg(value_name = "MESSAGE")]
    pub message: String,
}

/// Arguments for inspecting a saved model
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Saved pipeline file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Number of highest-likelihood tokens to show per class
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}
