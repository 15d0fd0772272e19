//! Search ranges, available windows, and gap extraction.
//!
//! Extraction sweeps the merged busy timeline with a "previous block" cursor.
//! Free time is only ever taken *after* a busy block ends, except for the
//! stretch between the search start and the very first block.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::block::Block;
use crate::error::{AvailabilityError, Result};
use crate::instant::Instant;

/// The `[start, end)` period within which availability is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: Instant> SearchRange<T> {
    /// Create a search range.
    ///
    /// # Errors
    /// Returns `AvailabilityError::InvertedRange` if `start` is after `end`.
    pub fn new(start: T, end: T) -> Result<Self> {
        if start > end {
            return Err(AvailabilityError::InvertedRange {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn length(&self) -> T::Span {
        self.start.span_until(self.end)
    }

    /// Whether `window` lies entirely within this range.
    pub fn covers(&self, window: &Window<T>) -> bool {
        self.start <= window.start && window.end <= self.end
    }
}

/// A stretch of time during which both parties are free. Always `start < end`
/// when produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window<T> {
    pub start: T,
    pub end: T,
}

impl<T: Instant> Window<T> {
    /// The window `[start, end)`, or `None` when it would be empty or inverted.
    pub fn spanning(start: T, end: T) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn length(&self) -> T::Span {
        self.start.span_until(self.end)
    }
}

impl<T> From<Window<T>> for (T, T) {
    fn from(window: Window<T>) -> Self {
        (window.start, window.end)
    }
}

/// Compute the free gap that follows `previous` inside `range`.
///
/// `next` is the following busy block, or `None` when `previous` is the last
/// one. The gap starts where `previous` ends (clamped to the range start) and
/// stops at `next.start` or the range end, whichever comes first. Returns
/// `Ok(None)` when `previous` ends at or after the range end, or when the gap
/// would be empty. With neither block present the whole range is the gap.
///
/// # Errors
/// Returns `AvailabilityError::InvariantViolation` when `next` is given without
/// `previous`. The extraction sweep never does this.
pub fn gap_candidate<T: Instant>(
    previous: Option<&Block<T>>,
    next: Option<&Block<T>>,
    range: &SearchRange<T>,
) -> Result<Option<Window<T>>> {
    let previous = match (previous, next) {
        (None, None) => return Ok(Window::spanning(range.start, range.end)),
        (None, Some(_)) => {
            error!("gap requested for a next block with no previous block");
            return Err(AvailabilityError::InvariantViolation(
                "cannot have a next busy block without a previous one",
            ));
        }
        (Some(previous), _) => previous,
    };

    if previous.end >= range.end {
        return Ok(None);
    }

    let start = previous.end.max(range.start);
    let end = match next {
        Some(next) => next.start.min(range.end),
        None => range.end,
    };
    Ok(Window::spanning(start, end))
}

/// Find every free window of at least `requested` length inside `range`.
///
/// `merged` must be the output of [`merge_blocks`](crate::merge::merge_blocks):
/// sorted by start, with no two blocks overlapping or touching. Windows are
/// returned in ascending order and never overlap.
#[instrument(level = "debug", skip_all, fields(busy = merged.len()))]
pub fn find_available_windows<T: Instant>(
    merged: &[Block<T>],
    range: &SearchRange<T>,
    requested: T::Span,
) -> Result<Vec<Window<T>>> {
    let mut windows = Vec::new();
    let mut previous: Option<&Block<T>> = None;

    for block in merged {
        let candidate = match previous {
            // Free time before the first busy block.
            None => Window::spanning(range.start, block.start.min(range.end)),
            Some(_) => gap_candidate(previous, Some(block), range)?,
        };
        push_if_long_enough(&mut windows, candidate, requested);
        previous = Some(block);
    }

    let trailing = gap_candidate(previous, None, range)?;
    push_if_long_enough(&mut windows, trailing, requested);

    debug!(windows = windows.len(), "available windows extracted");
    Ok(windows)
}

fn push_if_long_enough<T: Instant>(
    windows: &mut Vec<Window<T>>,
    candidate: Option<Window<T>>,
    requested: T::Span,
) {
    if let Some(window) = candidate.filter(|w| w.length() >= requested) {
        windows.push(window);
    }
}
