// File: src/config.rs
use crate::nlp::DEFAULT_MODEL;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "./output";

pub const TARGET_LEMMATIZED: &str = "target_lemmatized.csv";
pub const REFERENCE_LEMMATIZED: &str = "reference_lemmatized.csv";
pub const NOT_IN_REFERENCE: &str = "not_in_reference.csv";
pub const TARGET_SKIPPED: &str = "target_skipped.csv";
pub const REFERENCE_SKIPPED: &str = "reference_skipped.csv";

/// Everything a single comparison run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The text checked for out-of-vocabulary words.
    pub target: PathBuf,
    /// The baseline vocabulary text.
    pub reference: PathBuf,
    pub output_dir: PathBuf,
    /// Built-in tokenizer name, or a path to an nlprule tokenizer binary.
    pub model: String,
    /// JSON table of lemmas that replace the tagger's choice.
    pub lemma_overrides: Option<PathBuf>,
}

impl Config {
    pub fn new(target: impl Into<PathBuf>, reference: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            reference: reference.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            model: DEFAULT_MODEL.to_string(),
            lemma_overrides: None,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_lemma_overrides(mut self, path: impl Into<PathBuf>) -> Self {
        self.lemma_overrides = Some(path.into());
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
