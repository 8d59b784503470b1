//! Prompt-driven loop that aligns random strand pairs until told to stop

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use strandalign_core::{AlignmentEngine, RandomSequenceGenerator, ResultFormatter};

use crate::config::Config;
use crate::error::CliError;

pub const PROMPT: &str = "Generate random DNA strands? ";
const STRANDS_LABEL: &str = "Aligning these two strands: ";

/// Write the two input strands with the second one indented under the first.
pub fn write_strands<W: Write>(out: &mut W, seq1: &[u8], seq2: &[u8]) -> std::io::Result<()> {
    writeln!(out, "{}{}", STRANDS_LABEL, String::from_utf8_lossy(seq1))?;
    writeln!(
        out,
        "{}{}",
        " ".repeat(STRANDS_LABEL.len()),
        String::from_utf8_lossy(seq2)
    )
}

pub struct InteractionLoop<R: BufRead, W: Write> {
    input: R,
    output: W,
    engine: AlignmentEngine,
    generator: RandomSequenceGenerator,
    formatter: ResultFormatter,
    min_len: usize,
    max_len: usize,
    alphabet: Vec<u8>,
}

impl<R: BufRead, W: Write> InteractionLoop<R, W> {
    pub fn new(input: R, output: W, config: &Config, generator: RandomSequenceGenerator) -> Self {
        Self {
            input,
            output,
            engine: config.engine(),
            generator,
            formatter: config.formatter(),
            min_len: config.generator.min_len,
            max_len: config.generator.max_len,
            alphabet: config.generator.alphabet_bytes().to_vec(),
        }
    }

    /// Prompt until the answer is `no` or input runs out. Returns the number
    /// of pairs aligned.
    pub fn run(&mut self) -> Result<usize> {
        let mut rounds = 0;
        let mut line = String::new();

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read response")?;
            if read == 0 || line.trim().eq_ignore_ascii_case("no") {
                break;
            }

            self.round()?;
            rounds += 1;
        }

        log::debug!("Interactive session aligned {} pairs", rounds);
        Ok(rounds)
    }

    fn round(&mut self) -> Result<()> {
        let seq1 = self
            .generator
            .generate(self.min_len, self.max_len, self.alphabet.as_slice())
            .map_err(CliError::from)?;
        let seq2 = self
            .generator
            .generate(self.min_len, self.max_len, self.alphabet.as_slice())
            .map_err(CliError::from)?;

        write_strands(&mut self.output, &seq1, &seq2)?;
        let result = self.engine.try_align(&seq1, &seq2).map_err(CliError::from)?;
        self.formatter.write_to(&mut self.output, &result)?;
        Ok(())
    }
}
