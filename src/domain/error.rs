//! Engine error types.

use thiserror::Error;

/// Errors raised while building or applying a rule table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A record of the rule specification could not be parsed.
    #[error("invalid rule record {record:?} on line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// The record text as it appeared in the input.
        record: String,
        reason: &'static str,
    },

    /// A neighbor count with no table entry was looked up.
    #[error("no rule entry for neighbor count {count}")]
    UnknownNeighborCount { count: u32 },
}

/// Errors raised while constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Rules(#[from] RuleError),

    /// `width * height` does not fit in memory addressing.
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}
