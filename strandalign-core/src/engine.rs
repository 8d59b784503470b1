//! Global alignment engine
//!
//! `solve(i, j)` is the optimal alignment of `seq1[i..]` against `seq2[j..]`.
//! When both suffixes are non-empty three branches are considered, always in
//! this order:
//!
//! 1. align `seq1[i]` with `seq2[j]` (`solve(i + 1, j + 1)`),
//! 2. put `seq2[j]` opposite a gap (`solve(i, j + 1)`),
//! 3. put `seq1[i]` opposite a gap (`solve(i + 1, j)`).
//!
//! Equal leading symbols take branch 1 without evaluating the others. A later
//! branch replaces the current best only when it scores strictly higher, so
//! ties resolve to the earliest branch and the output is deterministic.
//!
//! Every strategy below fills the same [`MemoTable`] with the same cells; they
//! differ only in the order cells are visited. None of them recurse natively.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};
use crate::memo::{cells_needed, Cell, MemoTable};
use crate::scoring::{LinearScoring, ScoringPolicy};
use crate::types::{AlignmentResult, Step, SubproblemKey};

/// Order in which subproblems are solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Fill the whole table from `(len1, len2)` back to `(0, 0)`
    #[default]
    BottomUp,
    /// Memoized descent from `(0, 0)` driven by an explicit stack; only
    /// subproblems the recurrence actually asks for are solved
    TopDown,
    /// Fill one anti-diagonal at a time, each diagonal in parallel
    Wavefront,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BottomUp => "bottom-up",
            Strategy::TopDown => "top-down",
            Strategy::Wavefront => "wavefront",
        }
    }

    pub fn all() -> [Strategy; 3] {
        [Strategy::BottomUp, Strategy::TopDown, Strategy::Wavefront]
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bottom-up" | "bottomup" | "table" => Ok(Strategy::BottomUp),
            "top-down" | "topdown" | "memo" => Ok(Strategy::TopDown),
            "wavefront" | "diagonal" => Ok(Strategy::Wavefront),
            other => Err(format!(
                "unknown strategy '{}', expected bottom-up, top-down or wavefront",
                other
            )),
        }
    }
}

/// Computes optimal global alignments under a scoring policy.
#[derive(Debug, Clone)]
pub struct AlignmentEngine<P = LinearScoring> {
    policy: P,
    strategy: Strategy,
    max_cells: Option<usize>,
}

impl Default for AlignmentEngine<LinearScoring> {
    fn default() -> Self {
        Self::new(LinearScoring::default())
    }
}

impl<P: ScoringPolicy> AlignmentEngine<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            strategy: Strategy::default(),
            max_cells: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limit the memo table size accepted by [`AlignmentEngine::try_align`].
    pub fn with_max_cells(mut self, max_cells: Option<usize>) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Optimal alignment of `seq1` against `seq2`.
    ///
    /// Never fails for finite inputs under a validated policy; memory grows
    /// with `(len1 + 1) * (len2 + 1)`. Use [`AlignmentEngine::try_align`] to
    /// reject oversized inputs instead.
    pub fn align<T>(&self, seq1: &[T], seq2: &[T]) -> AlignmentResult<T>
    where
        T: PartialEq + Clone + Sync,
    {
        let memo = self.solve(seq1, seq2);
        memo.traceback(seq1, seq2)
    }

    /// Like [`AlignmentEngine::align`], but refuses inputs whose memo table
    /// would exceed the configured cell limit or whose score could overflow.
    pub fn try_align<T>(&self, seq1: &[T], seq2: &[T]) -> Result<AlignmentResult<T>>
    where
        T: PartialEq + Clone + Sync,
    {
        self.check_size(seq1.len(), seq2.len())?;
        Ok(self.align(seq1, seq2))
    }

    /// Optimal score only; skips the traceback.
    pub fn score<T>(&self, seq1: &[T], seq2: &[T]) -> i64
    where
        T: PartialEq + Sync,
    {
        self.solve(seq1, seq2).score_of(SubproblemKey::origin())
    }

    /// Align independent pairs in parallel. Results keep the input order.
    pub fn align_batch<T, S>(&self, pairs: &[(S, S)]) -> Vec<AlignmentResult<T>>
    where
        T: PartialEq + Clone + Send + Sync,
        S: AsRef<[T]> + Sync,
    {
        log::debug!("Aligning batch of {} pairs", pairs.len());
        pairs
            .par_iter()
            .map(|(seq1, seq2)| self.align(seq1.as_ref(), seq2.as_ref()))
            .collect()
    }

    /// Fails with [`AlignError::ResourceExhausted`] when a `len1` x `len2`
    /// alignment would exceed the cell limit, and with
    /// [`AlignError::InvalidScoring`] when its score could overflow `i64`.
    pub fn check_size(&self, len1: usize, len2: usize) -> Result<()> {
        let score_fits = len1
            .checked_add(len2)
            .and_then(|columns| i64::try_from(columns).ok())
            .and_then(|columns| columns.checked_mul(self.policy.column_bound()))
            .is_some();
        if !score_fits {
            return Err(AlignError::InvalidScoring(format!(
                "scores of a {}x{} alignment do not fit in i64",
                len1, len2
            )));
        }

        let limit = self.max_cells.unwrap_or(usize::MAX);
        match cells_needed(len1, len2) {
            Some(cells) if cells <= limit => Ok(()),
            Some(cells) => Err(AlignError::ResourceExhausted { cells, limit }),
            None => Err(AlignError::ResourceExhausted {
                cells: usize::MAX,
                limit,
            }),
        }
    }

    fn solve<T>(&self, seq1: &[T], seq2: &[T]) -> MemoTable
    where
        T: PartialEq + Sync,
    {
        let mut memo = MemoTable::new(seq1.len(), seq2.len());
        match self.strategy {
            Strategy::BottomUp => self.fill_bottom_up(seq1, seq2, &mut memo),
            Strategy::TopDown => self.fill_top_down(seq1, seq2, &mut memo),
            Strategy::Wavefront => self.fill_wavefront(seq1, seq2, &mut memo),
        }
        log::debug!(
            "{} solved {} of {} subproblems ({}x{})",
            self.strategy.name(),
            memo.filled(),
            memo.capacity(),
            seq1.len(),
            seq2.len()
        );
        memo
    }

    fn fill_bottom_up<T: PartialEq>(&self, seq1: &[T], seq2: &[T], memo: &mut MemoTable) {
        for i in (0..=seq1.len()).rev() {
            for j in (0..=seq2.len()).rev() {
                let key = SubproblemKey::new(i, j);
                let cell = self.evaluate(seq1, seq2, key, memo);
                memo.insert(key, cell);
            }
        }
    }

    fn fill_top_down<T: PartialEq>(&self, seq1: &[T], seq2: &[T], memo: &mut MemoTable) {
        let mut stack = vec![SubproblemKey::origin()];
        let mut pending = Vec::with_capacity(3);

        while let Some(&key) = stack.last() {
            if memo.contains(key) {
                stack.pop();
                continue;
            }

            pending.clear();
            pending.extend(
                self.dependencies(seq1, seq2, key)
                    .into_iter()
                    .flatten()
                    .filter(|dep| !memo.contains(*dep)),
            );

            if pending.is_empty() {
                let cell = self.evaluate(seq1, seq2, key, memo);
                memo.insert(key, cell);
                stack.pop();
            } else {
                // Pushed in reverse so the align-both child is solved first
                stack.extend(pending.iter().rev());
            }
        }
    }

    fn fill_wavefront<T>(&self, seq1: &[T], seq2: &[T], memo: &mut MemoTable)
    where
        T: PartialEq + Sync,
    {
        let (n, m) = (seq1.len(), seq2.len());
        for d in (0..=n + m).rev() {
            let lo = d.saturating_sub(m);
            let hi = d.min(n);
            let shared: &MemoTable = memo;
            let diagonal: Vec<(SubproblemKey, Cell)> = (lo..=hi)
                .into_par_iter()
                .map(|i| {
                    let key = SubproblemKey::new(i, d - i);
                    (key, self.evaluate(seq1, seq2, key, shared))
                })
                .collect();
            log::trace!("wavefront diagonal {} solved {} cells", d, diagonal.len());
            for (key, cell) in diagonal {
                memo.insert(key, cell);
            }
        }
    }

    /// Subproblems that must be solved before `key`, in evaluation order.
    fn dependencies<T: PartialEq>(
        &self,
        seq1: &[T],
        seq2: &[T],
        key: SubproblemKey,
    ) -> [Option<SubproblemKey>; 3] {
        let (n, m) = (seq1.len(), seq2.len());
        if key.i == n || key.j == m {
            return [None; 3];
        }
        let diagonal = Some(key.after(Step::Diagonal));
        if seq1[key.i] == seq2[key.j] {
            return [diagonal, None, None];
        }
        [
            diagonal,
            Some(key.after(Step::GapInFirst)),
            Some(key.after(Step::GapInSecond)),
        ]
    }

    /// Solve one subproblem from its already-solved dependencies.
    fn evaluate<T: PartialEq>(
        &self,
        seq1: &[T],
        seq2: &[T],
        key: SubproblemKey,
        memo: &MemoTable,
    ) -> Cell {
        let (n, m) = (seq1.len(), seq2.len());
        let gap = self.policy.gap();

        if key.i == n && key.j == m {
            return Cell::new(0, Step::End);
        }
        if key.i == n {
            return Cell::new(self.policy.gap_run(m - key.j), Step::GapInFirst);
        }
        if key.j == m {
            return Cell::new(self.policy.gap_run(n - key.i), Step::GapInSecond);
        }

        let (a, b) = (&seq1[key.i], &seq2[key.j]);
        let with_both = memo.score_of(key.after(Step::Diagonal));
        if a == b {
            return Cell::new(with_both + self.policy.match_score(), Step::Diagonal);
        }

        let mut best = Cell::new(with_both + self.policy.mismatch_score(), Step::Diagonal);

        let gap_in_first = memo.score_of(key.after(Step::GapInFirst)) + gap;
        if gap_in_first > best.score {
            best = Cell::new(gap_in_first, Step::GapInFirst);
        }

        let gap_in_second = memo.score_of(key.after(Step::GapInSecond)) + gap;
        if gap_in_second > best.score {
            best = Cell::new(gap_in_second, Step::GapInSecond);
        }

        best
    }
}
