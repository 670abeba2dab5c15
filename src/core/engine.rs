use crate::config::Config;
use crate::core::diff::find_difference;
use crate::core::normalizer::normalize_text;
use crate::core::types::FrequencyTable;
use crate::counting::{FileReport, FrequencyAggregator};
use crate::error::{LemmaError, Result};
use crate::nlp::{Analyzer, LemmaOverrides, NlpruleAnalyzer};
use crate::persistence::write_report;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Runs the per-file pipeline (normalize, analyze, filter, count) with a
/// fixed analyzer, and compares two files.
pub struct ComparisonEngine<A: Analyzer> {
    analyzer: A,
}

/// Everything computed for one target/reference pair.
#[derive(Debug, Clone, Default)]
pub struct ComparisonReport {
    pub target: FileReport,
    pub reference: FileReport,
    /// Lemmas of the target that never occur in the reference.
    pub difference: FrequencyTable,
}

impl<A: Analyzer> ComparisonEngine<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn process_text(&self, raw: &str) -> FileReport {
        let normalized = normalize_text(raw);
        let tokens = self.analyzer.analyze(&normalized);

        let mut aggregator = FrequencyAggregator::new();
        aggregator.observe_all(&tokens);
        let report = aggregator.finish();

        debug!(
            "{} tokens: {} counted ({} unique), {} skipped, {} dropped",
            tokens.len(),
            report.total_words(),
            report.unique_words(),
            report.skipped_total(),
            report.dropped
        );
        report
    }

    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        info!("processing {}", path.display());
        let raw = fs::read_to_string(path).map_err(|e| LemmaError::read(path, e))?;
        Ok(self.process_text(&raw))
    }

    /// Processes both files, target first. Nothing is written here.
    pub fn compare(&self, target: &Path, reference: &Path) -> Result<ComparisonReport> {
        let target = self.process_file(target)?;
        let reference = self.process_file(reference)?;
        let difference = find_difference(&target.frequencies, &reference.frequencies);
        Ok(ComparisonReport { target, reference, difference })
    }
}

/// Loads the configured tokenizer and override table, compares the two files
/// and writes every result file. Either all outputs are written or the run fails.
pub fn run(config: &Config) -> Result<ComparisonReport> {
    let mut analyzer = NlpruleAnalyzer::load(&config.model)?;
    if let Some(path) = &config.lemma_overrides {
        let overrides = LemmaOverrides::from_path(path)?;
        info!("{} lemma overrides from {}", overrides.len(), path.display());
        analyzer = analyzer.with_overrides(overrides);
    }
    let engine = ComparisonEngine::new(analyzer);
    info!("using tokenizer {}", engine.analyzer().name());

    let report = engine.compare(&config.target, &config.reference)?;
    write_report(&report, config.output_dir())?;
    Ok(report)
}
