//! Random command implementation - generate and align random DNA strand pairs

use anyhow::{Context, Result};
use std::io::Write;

use strandalign_core::{AlignmentResult, RandomSequenceGenerator};

use crate::commands::AlignmentReport;
use crate::config::Config;
use crate::error::CliError;
use crate::interactive::write_strands;

pub fn execute(
    config: &Config,
    generator: RandomSequenceGenerator,
    min_len: Option<usize>,
    max_len: Option<usize>,
    pairs: usize,
    json: bool,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(config, generator, min_len, max_len, pairs, json, &mut out)
}

fn run<W: Write>(
    config: &Config,
    mut generator: RandomSequenceGenerator,
    min_len: Option<usize>,
    max_len: Option<usize>,
    pairs: usize,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let min_len = min_len.unwrap_or(config.generator.min_len);
    let max_len = max_len.unwrap_or(config.generator.max_len);
    let alphabet = config.generator.alphabet_bytes();
    let engine = config.engine();

    log::info!(
        "Generating {} strand pairs of length {}..={}",
        pairs,
        min_len,
        max_len
    );

    let mut strands = Vec::new();
    for _ in 0..pairs {
        let seq1 = generator
            .generate(min_len, max_len, alphabet)
            .map_err(CliError::from)?;
        let seq2 = generator
            .generate(min_len, max_len, alphabet)
            .map_err(CliError::from)?;
        engine
            .check_size(seq1.len(), seq2.len())
            .map_err(CliError::from)?;
        strands.push((seq1, seq2));
    }

    let results: Vec<AlignmentResult<u8>> = engine.align_batch(&strands);
    log::debug!("Aligned {} pairs on {} threads", results.len(), rayon::current_num_threads());

    if json {
        let reports: Vec<AlignmentReport> = results
            .iter()
            .map(|result| AlignmentReport::new(result, config.output.gap_char))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &reports)
            .context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    let formatter = config.formatter();
    for (index, ((seq1, seq2), result)) in strands.iter().zip(&results).enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_strands(out, seq1, seq2)?;
        formatter
            .write_to(out, result)
            .context("Failed to write alignment")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(pairs: usize, json: bool) -> Result<String> {
        let mut out = Vec::new();
        run(
            &Config::default(),
            RandomSequenceGenerator::from_seed(21),
            Some(5),
            Some(12),
            pairs,
            json,
            &mut out,
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_text_output() -> Result<()> {
        let text = capture(3, false)?;
        assert_eq!(text.matches("Aligning these two strands: ").count(), 3);
        assert_eq!(text.matches("Optimal alignment score is ").count(), 3);
        Ok(())
    }

    #[test]
    fn test_json_output() -> Result<()> {
        let text = capture(4, true)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let reports = value.as_array().context("expected a JSON array")?;
        assert_eq!(reports.len(), 4);
        for report in reports {
            let row1 = report["aligned1"].as_str().context("aligned1")?;
            let row2 = report["aligned2"].as_str().context("aligned2")?;
            assert_eq!(row1.len(), row2.len());
        }
        Ok(())
    }

    #[test]
    fn test_seeded_output_is_reproducible() -> Result<()> {
        assert_eq!(capture(5, false)?, capture(5, false)?);
        Ok(())
    }

    #[test]
    fn test_huge_pair_count_fails_cleanly() {
        let mut out = Vec::new();
        let err = run(
            &Config::default(),
            RandomSequenceGenerator::from_seed(0),
            Some(4),
            Some(2),
            usize::MAX,
            false,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Validation { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_range() {
        let mut out = Vec::new();
        let err = run(
            &Config::default(),
            RandomSequenceGenerator::from_seed(0),
            Some(9),
            Some(3),
            1,
            false,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Validation { .. })
        ));
    }
}
