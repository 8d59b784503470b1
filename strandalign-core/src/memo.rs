//! Per-call memo table for suffix-pair subproblems
//!
//! The table is dense: one slot per `(i, j)` with `0 <= i <= len1` and
//! `0 <= j <= len2`. Each filled slot keeps only the optimal score of the
//! subproblem and the branch that achieved it; the aligned rows are rebuilt
//! once, afterwards, by [`MemoTable::traceback`].

use crate::types::{AlignmentResult, Step, SubproblemKey};

/// Memoized outcome of one subproblem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub score: i64,
    pub step: Step,
}

impl Cell {
    pub fn new(score: i64, step: Step) -> Self {
        Self { score, step }
    }
}

/// Number of slots needed to align sequences of the given lengths, or `None`
/// if it does not fit in `usize`.
pub fn cells_needed(len1: usize, len2: usize) -> Option<usize> {
    len1.checked_add(1)?.checked_mul(len2.checked_add(1)?)
}

pub struct MemoTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
    filled: usize,
}

impl MemoTable {
    /// Create an empty table for sequences of length `len1` and `len2`.
    ///
    /// # Panics
    ///
    /// Panics if `(len1 + 1) * (len2 + 1)` overflows `usize`. Callers that
    /// need an error instead check [`cells_needed`] first.
    pub fn new(len1: usize, len2: usize) -> Self {
        let size = match cells_needed(len1, len2) {
            Some(size) => size,
            None => panic!("memo table for {}x{} sequences overflows usize", len1, len2),
        };
        Self {
            rows: len1 + 1,
            cols: len2 + 1,
            cells: vec![None; size],
            filled: 0,
        }
    }

    #[inline]
    fn index(&self, key: SubproblemKey) -> usize {
        debug_assert!(key.i < self.rows && key.j < self.cols, "key {:?} out of range", key);
        key.i * self.cols + key.j
    }

    #[inline]
    pub fn get(&self, key: SubproblemKey) -> Option<Cell> {
        self.cells[self.index(key)]
    }

    #[inline]
    pub fn contains(&self, key: SubproblemKey) -> bool {
        self.get(key).is_some()
    }

    /// Store the outcome of `key`; the first write wins.
    pub fn insert(&mut self, key: SubproblemKey, cell: Cell) {
        let idx = self.index(key);
        if self.cells[idx].is_none() {
            self.cells[idx] = Some(cell);
            self.filled += 1;
        }
    }

    /// Score of a subproblem whose dependents are being evaluated
    #[inline]
    pub(crate) fn score_of(&self, key: SubproblemKey) -> i64 {
        match self.get(key) {
            Some(cell) => cell.score,
            None => unreachable!("subproblem {:?} read before it was solved", key),
        }
    }

    /// Number of solved subproblems
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Length of the first and second sequence this table was sized for
    pub fn dims(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }

    /// Rebuild the alignment of `seq1` against `seq2` by following the
    /// recorded steps from the origin to `(len1, len2)`.
    pub fn traceback<T: Clone>(&self, seq1: &[T], seq2: &[T]) -> AlignmentResult<T> {
        let (n, m) = (seq1.len(), seq2.len());
        debug_assert_eq!(self.dims(), (n, m));

        let score = self.score_of(SubproblemKey::origin());
        let mut aligned1 = Vec::with_capacity(n + m);
        let mut aligned2 = Vec::with_capacity(n + m);

        let mut key = SubproblemKey::origin();
        loop {
            // Once one suffix is exhausted the rest of the path is forced
            let step = if key.i == n && key.j == m {
                Step::End
            } else if key.i == n {
                Step::GapInFirst
            } else if key.j == m {
                Step::GapInSecond
            } else {
                match self.get(key) {
                    Some(cell) => cell.step,
                    None => unreachable!("traceback reached unsolved subproblem {:?}", key),
                }
            };

            match step {
                Step::Diagonal => {
                    aligned1.push(Some(seq1[key.i].clone()));
                    aligned2.push(Some(seq2[key.j].clone()));
                }
                Step::GapInFirst => {
                    aligned1.push(None);
                    aligned2.push(Some(seq2[key.j].clone()));
                }
                Step::GapInSecond => {
                    aligned1.push(Some(seq1[key.i].clone()));
                    aligned2.push(None);
                }
                Step::End => break,
            }
            key = key.after(step);
        }

        AlignmentResult {
            score,
            aligned1,
            aligned2,
        }
    }
}
