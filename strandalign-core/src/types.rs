//! Subproblem keys, traceback steps and alignment results
//!
//! A gap is `None` in either aligned row.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringPolicy;

/// Identifies the subproblem "align `seq1[i..]` against `seq2[j..]`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubproblemKey {
    pub i: usize,
    pub j: usize,
}

impl SubproblemKey {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// The full problem: both sequences from their first symbol
    pub fn origin() -> Self {
        Self { i: 0, j: 0 }
    }

    /// Anti-diagonal index; subproblems sharing it are mutually independent
    pub fn diagonal(&self) -> usize {
        self.i + self.j
    }

    /// Subproblem reached after taking `step` from this one
    pub fn after(self, step: Step) -> Self {
        match step {
            Step::Diagonal => Self::new(self.i + 1, self.j + 1),
            Step::GapInFirst => Self::new(self.i, self.j + 1),
            Step::GapInSecond => Self::new(self.i + 1, self.j),
            Step::End => self,
        }
    }
}

/// Branch chosen for one subproblem, i.e. the first column of its alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// `seq1[i]` aligned with `seq2[j]` (match or mismatch)
    Diagonal,
    /// `seq2[j]` aligned against a gap in the first sequence
    GapInFirst,
    /// `seq1[i]` aligned against a gap in the second sequence
    GapInSecond,
    /// Both suffixes are empty
    End,
}

impl Default for Step {
    fn default() -> Self {
        Step::End
    }
}

/// Summary counts over the columns of an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    /// Columns with a gap in the first row
    pub gaps_in_first: u32,
    /// Columns with a gap in the second row
    pub gaps_in_second: u32,
}

impl AlignmentStats {
    pub fn columns(&self) -> u32 {
        self.matches + self.mismatches + self.gaps_in_first + self.gaps_in_second
    }

    pub fn gaps(&self) -> u32 {
        self.gaps_in_first + self.gaps_in_second
    }

    /// Identity as a percentage of columns (0.0 to 100.0)
    pub fn identity(&self) -> f32 {
        let total = self.columns();
        if total == 0 {
            return 0.0;
        }
        (self.matches as f32 / total as f32) * 100.0
    }

    pub fn edit_distance(&self) -> u32 {
        self.mismatches + self.gaps()
    }
}

/// An optimal score together with one alignment achieving it.
///
/// Both rows have the same length; `None` marks a gap. A column never holds
/// two gaps, and dropping the gaps from a row gives back its input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult<T> {
    pub score: i64,
    pub aligned1: Vec<Option<T>>,
    pub aligned2: Vec<Option<T>>,
}

impl<T> AlignmentResult<T> {
    /// Number of columns
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (Option<&T>, Option<&T>)> + '_ {
        self.aligned1
            .iter()
            .zip(self.aligned2.iter())
            .map(|(a, b)| (a.as_ref(), b.as_ref()))
    }

    /// The column sequence expressed as traceback steps (without `End`)
    pub fn steps(&self) -> Vec<Step> {
        self.columns()
            .map(|column| match column {
                (Some(_), Some(_)) => Step::Diagonal,
                (None, Some(_)) => Step::GapInFirst,
                (Some(_), None) => Step::GapInSecond,
                (None, None) => Step::End,
            })
            .collect()
    }
}

impl<T: PartialEq> AlignmentResult<T> {
    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats::default();
        for column in self.columns() {
            match column {
                (Some(a), Some(b)) if a == b => stats.matches += 1,
                (Some(_), Some(_)) => stats.mismatches += 1,
                (None, Some(_)) => stats.gaps_in_first += 1,
                (Some(_), None) => stats.gaps_in_second += 1,
                (None, None) => {}
            }
        }
        stats
    }

    /// Score of the columns under `policy`, independent of the stored score
    pub fn rescore<P: ScoringPolicy>(&self, policy: &P) -> i64 {
        self.columns()
            .map(|column| match column {
                (Some(a), Some(b)) => policy.substitution(a, b),
                (None, None) => 0,
                _ => policy.gap(),
            })
            .sum()
    }

    /// Check the row invariants against the two input sequences.
    pub fn is_valid_for(&self, seq1: &[T], seq2: &[T]) -> bool {
        if self.aligned1.len() != self.aligned2.len() {
            return false;
        }
        if self.columns().any(|(a, b)| a.is_none() && b.is_none()) {
            return false;
        }
        self.aligned1.iter().flatten().eq(seq1.iter())
            && self.aligned2.iter().flatten().eq(seq2.iter())
    }
}

impl<T: Clone> AlignmentResult<T> {
    /// First row with gaps removed
    pub fn ungapped1(&self) -> Vec<T> {
        self.aligned1.iter().flatten().cloned().collect()
    }

    /// Second row with gaps removed
    pub fn ungapped2(&self) -> Vec<T> {
        self.aligned2.iter().flatten().cloned().collect()
    }
}

impl<T: Copy + Into<char>> AlignmentResult<T> {
    /// Both rows as text, rendering gaps as `gap`
    pub fn gapped(&self, gap: char) -> (String, String) {
        let render = |row: &[Option<T>]| -> String {
            row.iter()
                .map(|symbol| symbol.map_or(gap, Into::into))
                .collect()
        };
        (render(&self.aligned1), render(&self.aligned2))
    }
}
