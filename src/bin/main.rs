use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use lemma_core::config::DEFAULT_OUTPUT_DIR;
use lemma_core::nlp::DEFAULT_MODEL;
use lemma_core::{run, ComparisonReport, Config};
use std::path::PathBuf;

/// Lists the lemmas of a target text that never appear in a reference text.
#[derive(Parser, Debug)]
#[command(name = "lemma_compare", version, about, long_about = None)]
struct Args {
    /// Text file to analyze
    #[arg(long, visible_alias = "object", value_name = "PATH")]
    target: PathBuf,

    /// Baseline text file
    #[arg(long = "ref", value_name = "PATH")]
    reference: PathBuf,

    /// Directory receiving the CSV files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, value_name = "DIR")]
    output: PathBuf,

    /// Built-in tokenizer name or path to an nlprule tokenizer binary
    #[arg(long, default_value = DEFAULT_MODEL, value_name = "MODEL")]
    model: String,

    /// JSON table of surface form -> lemma replacements
    #[arg(long, value_name = "PATH")]
    lemma_overrides: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = Config::new(args.target, args.reference)
        .with_output_dir(args.output)
        .with_model(args.model);
    if let Some(path) = args.lemma_overrides {
        config = config.with_lemma_overrides(path);
    }

    let report = run(&config).with_context(|| {
        format!(
            "could not compare {} against {}",
            config.target.display(),
            config.reference.display()
        )
    })?;

    print_summary(&report, &config);
    Ok(())
}

fn print_summary(report: &ComparisonReport, config: &Config) {
    let rows = [
        ("target unique words", report.target.unique_words().to_string().green()),
        ("reference unique words", report.reference.unique_words().to_string().green()),
        ("target skipped tokens", report.target.skipped_total().to_string().dark_yellow()),
        ("reference skipped tokens", report.reference.skipped_total().to_string().dark_yellow()),
        ("words not in reference", report.difference.len().to_string().cyan()),
    ];

    println!();
    println!("{}", "--- Summary ---".bold());
    for (label, value) in rows {
        println!("{:<26}{}", format!("{label}:"), value);
    }
    println!("output written to {}", config.output_dir.display());
}
