//! Ranking error types.

use thiserror::Error;

/// Errors that can occur while ranking probe results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("expected exactly 2 probe results, got {0}")]
    NotEnoughSamples(usize),

    #[error("no candidate host is reachable")]
    AllUnreachable,
}
