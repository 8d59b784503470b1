//! Command implementations for the strandalign CLI

pub mod align;
pub mod config;
pub mod interactive;
pub mod random;

use serde::Serialize;
use strandalign_core::AlignmentResult;

/// Machine-readable form of one alignment, as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub score: i64,
    pub aligned1: String,
    pub aligned2: String,
}

impl AlignmentReport {
    pub fn new(result: &AlignmentResult<u8>, gap: char) -> Self {
        let (aligned1, aligned2) = result.gapped(gap);
        Self {
            score: result.score,
            aligned1,
            aligned2,
        }
    }
}
