//! Dataset loading and label normalization.
//!
//! The loader is a pure transform over already-parsed tabular data: CSV or
//! spreadsheet parsing is an external collaborator that supplies [`Row`]
//! values (column name → string, with a missing sentinel distinct from the
//! empty string). The loader merges the configured text-bearing columns into
//! one message string and maps the raw label through a fixed [`LabelTable`].
//!
//! # Examples
//!
//! ```
//! use spamsift::dataset::loader::{DatasetLoader, Label, LoaderConfig, Row};
//!
//! let rows = vec![
//!     Row::new()
//!         .with_column("label", "spam")
//!         .with_column("message", "win money now"),
//!     Row::new()
//!         .with_column("label", "ham")
//!         .with_column("message", "meet for lunch"),
//! ];
//!
//! let loader = DatasetLoader::new(LoaderConfig::default()).unwrap();
//! let pairs = loader.load(&rows).unwrap();
//!
//! assert_eq!(pairs[0], (Label::Spam, "win money now".to_string()));
//! assert_eq!(pairs[1].0, Label::Ham);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamsiftError};

/// Binary message label.
///
/// The two admissible classes after label normalization. The numeric codes
/// are load-bearing: prediction ties resolve to the lower code, so `Ham`
/// must stay 0 and `Spam` 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate message (code 0).
    Ham,
    /// Unsolicited message (code 1).
    Spam,
}

impl Label {
    /// All labels, ordered by numeric code.
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    /// Numeric code of this label (0 for ham, 1 for spam).
    pub fn code(self) -> usize {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }

    /// Label for a numeric code, if valid.
    pub fn from_code(code: usize) -> Option<Label> {
        match code {
            0 => Some(Label::Ham),
            1 => Some(Label::Spam),
            _ => None,
        }
    }

    /// Canonical string form of this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from raw label strings to [`Label`] values.
///
/// The single canonical place where label spellings are interpreted; any
/// value outside the table is a data error at load time, never an ad hoc
/// string comparison downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelTable {
    mapping: HashMap<String, Label>,
}

impl LabelTable {
    /// Create an empty label table.
    pub fn new() -> Self {
        LabelTable {
            mapping: HashMap::new(),
        }
    }

    /// Add a raw-string → label mapping.
    pub fn with_mapping<S: Into<String>>(mut self, raw: S, label: Label) -> Self {
        self.mapping.insert(raw.into(), label);
        self
    }

    /// Look up a raw label value.
    pub fn lookup(&self, raw: &str) -> Option<Label> {
        self.mapping.get(raw).copied()
    }

    /// The raw values this table accepts, sorted.
    pub fn known_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.mapping.keys().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

impl Default for LabelTable {
    /// The conventional `ham`/`spam` mapping.
    fn default() -> Self {
        LabelTable::new()
            .with_mapping("ham", Label::Ham)
            .with_mapping("spam", Label::Spam)
    }
}

/// One input record: a column name → string mapping.
///
/// An absent column is distinct from a column holding the empty string;
/// [`Row::get`] returns `None` for the former and `Some("")` for the latter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: HashMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Row::default()
    }

    /// Add a column value.
    pub fn with_column<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    /// Look up a column by name. `None` means the column is missing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }
}

/// What to do with a row whose label cannot be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Abort the load with a `DataFormat` error (default).
    Fail,
    /// Log a warning with the row index and drop the row.
    Skip,
}

/// Configuration for the dataset loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Column holding the raw label value.
    pub label_column: String,
    /// Columns concatenated (space-separated) into the message text.
    pub text_columns: Vec<String>,
    /// Raw label → label mapping.
    pub label_table: LabelTable,
    /// Policy for rows with unmappable labels.
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            label_column: "label".to_string(),
            text_columns: vec!["message".to_string()],
            label_table: LabelTable::default(),
            malformed_rows: MalformedRowPolicy::Fail,
        }
    }
}

/// Transforms tabular rows into `(Label, message)` pairs.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    config: LoaderConfig,
}

impl DatasetLoader {
    /// Create a loader, validating the configuration.
    ///
    /// Zero configured text columns is rejected eagerly as a data format
    /// error: every row would degenerate to an empty message, so no load
    /// over such a configuration can produce usable pairs.
    pub fn new(config: LoaderConfig) -> Result<Self> {
        if config.text_columns.is_empty() {
            return Err(SpamsiftError::data_format(
                "loader: at least one text column must be configured",
            ));
        }
        Ok(DatasetLoader { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Transform rows into `(Label, message)` pairs.
    ///
    /// Text columns are concatenated with a single space; a missing or
    /// empty column contributes the empty string and is never an error.
    /// An unmappable label is handled per [`MalformedRowPolicy`].
    pub fn load(&self, rows: &[Row]) -> Result<Vec<(Label, String)>> {
        let mut pairs = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let raw_label = row.get(&self.config.label_column).unwrap_or("");
            let label = match self.config.label_table.lookup(raw_label) {
                Some(label) => label,
                None => match self.config.malformed_rows {
                    MalformedRowPolicy::Fail => {
                        return Err(SpamsiftError::data_format(format!(
                            "row {index}: unrecognized label '{raw_label}' in column '{}' (expected one of {:?})",
                            self.config.label_column,
                            self.config.label_table.known_values(),
                        )));
                    }
                    MalformedRowPolicy::Skip => {
                        log::warn!(
                            "skipping row {index}: unrecognized label '{raw_label}' in column '{}'",
                            self.config.label_column
                        );
                        continue;
                    }
                },
            };

            let message = self
                .config
                .text_columns
                .iter()
                .map(|column| row.get(column).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ");

            pairs.push((label, message));
        }

        Ok(pairs)
    }
}
