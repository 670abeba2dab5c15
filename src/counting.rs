// File: src/counting.rs
use crate::core::filter::{classify, Verdict};
use crate::core::types::{FrequencyTable, SkipKey, SkipTable, Token};
use log::trace;

/// Counts for one input file. One aggregator per file; nothing is shared
/// between files.
pub struct FrequencyAggregator {
    frequencies: FrequencyTable,
    skipped: SkipTable,
    dropped: u64,
}

/// The finished tables of a single input file.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub frequencies: FrequencyTable,
    pub skipped: SkipTable,
    /// Punctuation, whitespace and numeric tokens that left no record.
    pub dropped: u64,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self {
            frequencies: FrequencyTable::new(),
            skipped: SkipTable::new(),
            dropped: 0,
        }
    }

    /// Classifies `token` and records the outcome.
    pub fn observe(&mut self, token: &Token) {
        match classify(token) {
            Verdict::Dropped => self.dropped += 1,
            Verdict::Skipped { lemma, reason } => {
                trace!("skip {:?} (lemma {:?}): {}", token.text, lemma, reason);
                let key = SkipKey { token: token.text.clone(), lemma, reason };
                self.skipped.increment(key);
            }
            Verdict::Counted(lemma) => self.frequencies.increment(lemma),
        }
    }

    pub fn observe_all<'a>(&mut self, tokens: impl IntoIterator<Item = &'a Token>) {
        for token in tokens {
            self.observe(token);
        }
    }

    pub fn finish(self) -> FileReport {
        FileReport {
            frequencies: self.frequencies,
            skipped: self.skipped,
            dropped: self.dropped,
        }
    }
}

impl Default for FrequencyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl FileReport {
    /// Distinct counted lemmas.
    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }

    /// Counted tokens.
    pub fn total_words(&self) -> u64 {
        self.frequencies.total()
    }

    /// Skipped tokens, with repetitions.
    pub fn skipped_total(&self) -> u64 {
        self.skipped.total()
    }
}
