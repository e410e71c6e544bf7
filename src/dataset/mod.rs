//! Dataset ingestion and partitioning.
//!
//! Tabular parsing (CSV, spreadsheets) is an external collaborator; this
//! module starts from already-parsed [`loader::Row`] values and produces
//! labelled pairs plus reproducible train/test partitions.

pub mod loader;
pub mod split;

pub use loader::{DatasetLoader, Label, LabelTable, LoaderConfig, MalformedRowPolicy, Row};
pub use split::train_test_split;
