// File: src/persistence.rs
use crate::config::{
    NOT_IN_REFERENCE, REFERENCE_LEMMATIZED, REFERENCE_SKIPPED, TARGET_LEMMATIZED, TARGET_SKIPPED,
};
use crate::core::engine::ComparisonReport;
use crate::core::types::{FrequencyTable, SkipKey, SkipReason, SkipTable};
use crate::error::{LemmaError, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const FREQUENCY_HEADER: [&str; 2] = ["word", "frequency"];
const SKIP_HEADER: [&str; 4] = ["token", "lemma", "reason", "frequency"];

#[derive(Serialize)]
struct FrequencyRow<'a> {
    word: &'a str,
    frequency: u64,
}

#[derive(Serialize)]
struct SkipRow<'a> {
    token: &'a str,
    lemma: &'a str,
    reason: SkipReason,
    frequency: u64,
}

/// A fully written CSV waiting in a temp file next to its final path.
struct StagedFile {
    temp: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    fn persist(self) -> Result<PathBuf> {
        let StagedFile { temp, path } = self;
        temp.persist(&path).map_err(|e| LemmaError::Persist {
            path: path.clone(),
            source: e.error,
        })?;
        info!("wrote {}", path.display());
        Ok(path)
    }
}

fn stage_csv<R: Serialize>(
    dir: &Path,
    file_name: &str,
    header: &[&str],
    rows: impl IntoIterator<Item = R>,
) -> Result<StagedFile> {
    let path = dir.join(file_name);
    let temp = NamedTempFile::new_in(dir).map_err(|e| LemmaError::write(&path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(temp.as_file()));
    writer.write_record(header)?;
    let mut written = 0usize;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush().map_err(|e| LemmaError::write(&path, e))?;
    drop(writer);

    debug!("staged {} rows for {}", written, path.display());
    Ok(StagedFile { temp, path })
}

fn stage_frequency_table(table: &FrequencyTable, dir: &Path, file_name: &str) -> Result<StagedFile> {
    let rows = table
        .sorted()
        .into_iter()
        .map(|(word, frequency)| FrequencyRow { word, frequency });
    stage_csv(dir, file_name, &FREQUENCY_HEADER, rows)
}

fn stage_skip_table(table: &SkipTable, dir: &Path, file_name: &str) -> Result<StagedFile> {
    let rows = table.sorted().into_iter().map(|(key, frequency)| SkipRow {
        token: &key.token,
        lemma: &key.lemma,
        reason: key.reason,
        frequency,
    });
    stage_csv(dir, file_name, &SKIP_HEADER, rows)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| LemmaError::write(dir, e))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes `table` as a `word,frequency` CSV, most frequent first.
pub fn save_frequency_table(table: &FrequencyTable, path: &Path) -> Result<()> {
    let dir = parent_dir(path);
    ensure_dir(dir)?;
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    stage_frequency_table(table, dir, &file_name)?.persist()?;
    Ok(())
}

/// Writes `table` as a `token,lemma,reason,frequency` CSV, most frequent first.
pub fn save_skip_table(table: &SkipTable, path: &Path) -> Result<()> {
    let dir = parent_dir(path);
    ensure_dir(dir)?;
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    stage_skip_table(table, dir, &file_name)?.persist()?;
    Ok(())
}

/// Writes all five result files into `output_dir`.
///
/// Every file is staged before any of them is moved into place. If moving one
/// into place fails, the files already moved are removed again, so an error
/// leaves no result files behind.
pub fn write_report(report: &ComparisonReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(output_dir)?;

    let staged = vec![
        stage_frequency_table(&report.target.frequencies, output_dir, TARGET_LEMMATIZED)?,
        stage_frequency_table(&report.reference.frequencies, output_dir, REFERENCE_LEMMATIZED)?,
        stage_frequency_table(&report.difference, output_dir, NOT_IN_REFERENCE)?,
        stage_skip_table(&report.target.skipped, output_dir, TARGET_SKIPPED)?,
        stage_skip_table(&report.reference.skipped, output_dir, REFERENCE_SKIPPED)?,
    ];

    let mut written = Vec::with_capacity(staged.len());
    for file in staged {
        match file.persist() {
            Ok(path) => written.push(path),
            Err(e) => {
                roll_back(&written);
                return Err(e);
            }
        }
    }
    Ok(written)
}

fn roll_back(written: &[PathBuf]) {
    for path in written {
        match fs::remove_file(path) {
            Ok(()) => debug!("removed {}", path.display()),
            Err(e) => warn!("could not remove partial output {}: {}", path.display(), e),
        }
    }
}

fn open_csv(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| LemmaError::read(path, e))?;
    Ok(csv::Reader::from_reader(BufReader::new(file)))
}

/// Reads a `word,frequency` CSV back into a table, keeping file order.
pub fn load_frequency_table(path: &Path) -> Result<FrequencyTable> {
    let mut reader = open_csv(path)?;
    let mut table = FrequencyTable::new();
    for record in reader.deserialize() {
        let (word, frequency): (String, u64) = record?;
        table.add(word, frequency);
    }
    Ok(table)
}

/// Reads a `token,lemma,reason,frequency` CSV back into a table.
pub fn load_skip_table(path: &Path) -> Result<SkipTable> {
    let mut reader = open_csv(path)?;
    let mut table = SkipTable::new();
    for record in reader.deserialize() {
        let (token, lemma, reason, frequency): (String, String, SkipReason, u64) = record?;
        table.add(SkipKey { token, lemma, reason }, frequency);
    }
    Ok(table)
}
