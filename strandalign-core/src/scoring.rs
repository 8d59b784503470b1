//! Linear scoring policies
//!
//! A policy assigns a score to every column of an alignment: one value for
//! two equal symbols, one for two different symbols, and one for a symbol
//! opposite a gap. There is no separate gap-open cost.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};

/// Score for two equal symbols aligned together
pub const MATCH: i64 = 1;
/// Score for two different symbols aligned together
pub const MISMATCH: i64 = -1;
/// Score for each symbol aligned against a gap
pub const GAP: i64 = -2;

/// Largest absolute column score [`LinearScoring::validate`] accepts. Any
/// alignment shorter than 2^32 columns then stays inside `i64`.
pub const MAX_SCORE_MAGNITUDE: i64 = i32::MAX as i64;

/// Pure column scoring used by the alignment engine.
pub trait ScoringPolicy: Send + Sync {
    /// Score of a column holding two equal symbols
    fn match_score(&self) -> i64;

    /// Score of a column holding two different symbols
    fn mismatch_score(&self) -> i64;

    /// Score of a column holding a symbol and a gap
    fn gap(&self) -> i64;

    /// Score of aligning `a` against `b`
    fn substitution<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> i64
    where
        Self: Sized,
    {
        if a == b {
            self.match_score()
        } else {
            self.mismatch_score()
        }
    }

    /// Score of `len` consecutive symbols aligned against gaps
    fn gap_run(&self, len: usize) -> i64 {
        self.gap() * len as i64
    }

    /// Largest absolute score any single column can contribute
    fn column_bound(&self) -> i64 {
        self.match_score()
            .saturating_abs()
            .max(self.mismatch_score().saturating_abs())
            .max(self.gap().saturating_abs())
    }
}

/// Fixed match/mismatch/gap scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearScoring {
    #[serde(default = "default_match")]
    pub match_score: i64,
    #[serde(default = "default_mismatch")]
    pub mismatch_score: i64,
    #[serde(default = "default_gap")]
    pub gap_penalty: i64,
}

fn default_match() -> i64 { MATCH }
fn default_mismatch() -> i64 { MISMATCH }
fn default_gap() -> i64 { GAP }

impl Default for LinearScoring {
    fn default() -> Self {
        Self {
            match_score: MATCH,
            mismatch_score: MISMATCH,
            gap_penalty: GAP,
        }
    }
}

impl LinearScoring {
    pub fn new(match_score: i64, mismatch_score: i64, gap_penalty: i64) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// Check that the policy is one the engine can optimize exactly.
    ///
    /// The engine commits to aligning equal leading symbols without looking
    /// at the gap branches, which is only optimal when a match never scores
    /// below a mismatch and gaps never add to the score.
    pub fn validate(&self) -> Result<()> {
        if self.match_score < self.mismatch_score {
            return Err(AlignError::InvalidScoring(format!(
                "match score {} is lower than mismatch score {}",
                self.match_score, self.mismatch_score
            )));
        }
        if self.gap_penalty > 0 {
            return Err(AlignError::InvalidScoring(format!(
                "gap penalty {} must not be positive",
                self.gap_penalty
            )));
        }
        if self.column_bound() > MAX_SCORE_MAGNITUDE {
            return Err(AlignError::InvalidScoring(format!(
                "column scores must lie within +/-{}",
                MAX_SCORE_MAGNITUDE
            )));
        }
        Ok(())
    }
}

impl ScoringPolicy for LinearScoring {
    #[inline]
    fn match_score(&self) -> i64 {
        self.match_score
    }

    #[inline]
    fn mismatch_score(&self) -> i64 {
        self.mismatch_score
    }

    #[inline]
    fn gap(&self) -> i64 {
        self.gap_penalty
    }
}
