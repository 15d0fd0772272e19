//! Error types for availability computation.

use thiserror::Error;

use crate::block::Party;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Invalid search range: start {start} is after end {end}")]
    InvertedRange { start: String, end: String },

    #[error("Invalid blocker #{index} for {party}: start {start} is after end {end}")]
    InvertedBlocker {
        party: Party,
        index: usize,
        start: String,
        end: String,
    },

    #[error("Invalid requested duration: {0} is negative")]
    NegativeDuration(String),

    /// A state the extraction sweep can never produce was reached. This is a
    /// defect in the crate, not a problem with the caller's input.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
