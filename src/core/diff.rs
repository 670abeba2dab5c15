// File: src/core/diff.rs
use crate::core::types::FrequencyTable;

/// Lemmas present in `target` but absent from `reference`, with their target
/// counts. Only key presence in `reference` matters, never its counts.
pub fn find_difference(target: &FrequencyTable, reference: &FrequencyTable) -> FrequencyTable {
    target
        .iter()
        .filter(|(word, _)| !reference.contains(word))
        .map(|(word, count)| (word.clone(), count))
        .collect()
}
