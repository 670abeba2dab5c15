//! Tokenization and lemmatization.
//!
//! The pipeline only relies on the [`Analyzer`] trait. [`NlpruleAnalyzer`] is
//! the implementation used by the binary; [`LemmaOverrides`] lets a JSON table
//! replace individual lemmas.

pub mod overrides;
pub mod tokenizer;

pub use overrides::LemmaOverrides;
pub use tokenizer::{NlpruleAnalyzer, DEFAULT_MODEL};

use crate::core::types::Token;

/// Turns normalized text into tokens carrying surface text, lemma and the
/// punctuation/space/number flags.
pub trait Analyzer {
    /// Name of the model in use, for progress output.
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> Vec<Token>;
}
