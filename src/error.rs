// File: src/error.rs
use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T, E = LemmaError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LemmaError {
    /// An input text, tokenizer or override file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory or one of its files could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A staged output file could not be moved into place. Its temp file is
    /// removed before this error is returned.
    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lemma override table {name}: {source}")]
    Overrides {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The tokenizer binary could not be loaded.
    #[error("failed to load tokenizer {name}: {source}")]
    Tokenizer {
        name: String,
        #[source]
        source: nlprule::Error,
    },
}

impl LemmaError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}
