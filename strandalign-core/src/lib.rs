//! strandalign core library
//!
//! Optimal global alignment of two symbol sequences under linear scoring,
//! memoized over suffix pairs, with the alignment rebuilt by traceback.

pub mod error;
pub mod scoring;
pub mod types;
pub mod memo;
pub mod engine;
pub mod generator;
pub mod format;

// Re-export commonly used types and functions
pub use error::{AlignError, Result};
pub use scoring::{LinearScoring, ScoringPolicy, GAP, MATCH, MAX_SCORE_MAGNITUDE, MISMATCH};
pub use types::{AlignmentResult, AlignmentStats, Step, SubproblemKey};
pub use memo::MemoTable;
pub use engine::{AlignmentEngine, Strategy};
pub use generator::{RandomSequenceGenerator, DNA_ALPHABET};
pub use format::ResultFormatter;

/// Version information for the strandalign core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Align two sequences with the default scoring (match +1, mismatch -1,
/// gap -2).
pub fn align<T>(seq1: &[T], seq2: &[T]) -> AlignmentResult<T>
where
    T: PartialEq + Clone + Sync,
{
    AlignmentEngine::default().align(seq1, seq2)
}
