//! Random test sequences
//!
//! The random source is injected so that callers (and tests) can fix a seed
//! and get the same strands back on every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{AlignError, Result};

/// Nucleotide alphabet used for random DNA strands
pub const DNA_ALPHABET: &[u8] = b"ATGC";

/// Draws sequences of random length over a caller-supplied alphabet.
pub struct RandomSequenceGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomSequenceGenerator<StdRng> {
    /// Deterministic generator for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSequenceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a sequence whose length is drawn uniformly from
    /// `[min_len, max_len]`, each symbol drawn uniformly from `alphabet`.
    pub fn generate<T: Clone>(
        &mut self,
        min_len: usize,
        max_len: usize,
        alphabet: &[T],
    ) -> Result<Vec<T>> {
        validate_range(min_len, max_len)?;
        if alphabet.is_empty() {
            return Err(AlignError::EmptyAlphabet);
        }

        let length = self.rng.gen_range(min_len..=max_len);
        let mut sequence = Vec::with_capacity(length);
        for _ in 0..length {
            if let Some(symbol) = alphabet.choose(&mut self.rng) {
                sequence.push(symbol.clone());
            }
        }
        Ok(sequence)
    }

    /// Random DNA strand over A, T, G and C
    pub fn generate_dna(&mut self, min_len: usize, max_len: usize) -> Result<Vec<u8>> {
        self.generate(min_len, max_len, DNA_ALPHABET)
    }

    /// Two independent DNA strands with the same length bounds
    pub fn generate_dna_pair(
        &mut self,
        min_len: usize,
        max_len: usize,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let first = self.generate_dna(min_len, max_len)?;
        let second = self.generate_dna(min_len, max_len)?;
        Ok((first, second))
    }
}

/// Check a requested length range: both bounds positive, `min_len <= max_len`.
pub fn validate_range(min_len: usize, max_len: usize) -> Result<()> {
    if min_len == 0 || max_len < min_len {
        return Err(AlignError::InvalidRange {
            min: min_len,
            max: max_len,
        });
    }
    Ok(())
}
