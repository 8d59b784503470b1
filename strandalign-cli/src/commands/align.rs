//! Align command implementation - align two sequences given on the command line

use anyhow::{Context, Result};
use std::io::Write;

use crate::commands::AlignmentReport;
use crate::config::Config;
use crate::error::CliError;
use crate::StrategyArg;

pub fn execute(
    config: &Config,
    seq1: String,
    seq2: String,
    strategy: Option<StrategyArg>,
    json: bool,
    max_cells: Option<usize>,
) -> Result<()> {
    let seq1 = parse_sequence(&seq1)?;
    let seq2 = parse_sequence(&seq2)?;

    let mut engine = config.engine();
    if let Some(strategy) = strategy {
        engine = engine.with_strategy(strategy.into());
    }
    if max_cells.is_some() {
        engine = engine.with_max_cells(max_cells);
    }

    log::info!(
        "Aligning {} bp against {} bp using {}",
        seq1.len(),
        seq2.len(),
        engine.strategy().name()
    );

    let result = engine.try_align(&seq1, &seq2).map_err(CliError::from)?;

    let stats = result.stats();
    log::info!(
        "Score {}: {} matches, {} mismatches, {} gaps ({:.1}% identity)",
        result.score,
        stats.matches,
        stats.mismatches,
        stats.gaps(),
        stats.identity()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let report = AlignmentReport::new(&result, config.output.gap_char);
        serde_json::to_writer_pretty(&mut out, &report)
            .context("Failed to write JSON output")?;
        writeln!(out)?;
    } else {
        config
            .formatter()
            .write_to(&mut out, &result)
            .context("Failed to write alignment")?;
    }

    Ok(())
}

/// Accept any ASCII sequence; symbols are compared byte for byte.
fn parse_sequence(raw: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = raw.trim();
    if !trimmed.is_ascii() {
        return Err(CliError::invalid_sequence(format!(
            "'{}' contains non-ASCII characters",
            trimmed
        )));
    }
    Ok(trimmed.as_bytes().to_vec())
}
