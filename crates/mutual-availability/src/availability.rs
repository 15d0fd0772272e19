//! Two-party availability: the public entry points.
//!
//! Validates the caller's input, then runs the three-stage pipeline:
//! tag and combine both blocker lists, merge them into one busy timeline,
//! and extract the free windows that are long enough.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::block::{combine_blockers, Party};
use crate::error::{AvailabilityError, Result};
use crate::instant::Instant;
use crate::merge::merge_blocks;
use crate::window::{find_available_windows, SearchRange, Window};

/// Find every window in `[search_start, search_end)` during which both parties
/// are free for at least `requested`.
///
/// Blockers may overlap, touch, or lie partly or wholly outside the search
/// range. The result is sorted, non-overlapping, contained in the search range,
/// and every window is at least `requested` long.
///
/// # Arguments
///
/// * `party_a` — Busy `(start, end)` intervals of the first party.
/// * `party_b` — Busy `(start, end)` intervals of the second party.
/// * `search_start` — Start of the period to search.
/// * `search_end` — End of the period to search.
/// * `requested` — Minimum length of a returned window.
///
/// # Errors
/// Returns `AvailabilityError::InvertedRange` if `search_start > search_end`,
/// `AvailabilityError::InvertedBlocker` if any blocker starts after it ends, and
/// `AvailabilityError::NegativeDuration` if `requested` is negative.
#[instrument(
    skip_all,
    fields(party_a = party_a.len(), party_b = party_b.len()),
    err(Display)
)]
pub fn compute_available_windows<T: Instant>(
    party_a: &[(T, T)],
    party_b: &[(T, T)],
    search_start: T,
    search_end: T,
    requested: T::Span,
) -> Result<Vec<Window<T>>> {
    let range = SearchRange::new(search_start, search_end)?;
    validate_duration::<T>(requested)?;
    validate_blockers(Party::A, party_a)?;
    validate_blockers(Party::B, party_b)?;

    let merged = merge_blocks(combine_blockers(party_a, party_b));
    find_available_windows(&merged, &range, requested)
}

/// Find the earliest window of at least `requested` length.
///
/// Delegates to [`compute_available_windows`] and returns its first window.
pub fn first_available_window<T: Instant>(
    party_a: &[(T, T)],
    party_b: &[(T, T)],
    search_start: T,
    search_end: T,
    requested: T::Span,
) -> Result<Option<Window<T>>> {
    let windows = compute_available_windows(party_a, party_b, search_start, search_end, requested)?;
    Ok(windows.into_iter().next())
}

/// A complete availability query, e.g. decoded from JSON.
///
/// `S` is the span type of `T` (see [`Instant::Span`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRequest<T, S> {
    #[serde(default)]
    pub party_a: Vec<(T, T)>,
    #[serde(default)]
    pub party_b: Vec<(T, T)>,
    pub search: SearchRange<T>,
    pub duration: S,
}

impl<T: Instant> AvailabilityRequest<T, T::Span> {
    /// Run the query. Input is validated the same way as
    /// [`compute_available_windows`].
    pub fn evaluate(&self) -> Result<Vec<Window<T>>> {
        compute_available_windows(
            &self.party_a,
            &self.party_b,
            self.search.start,
            self.search.end,
            self.duration,
        )
    }
}

fn validate_duration<T: Instant>(requested: T::Span) -> Result<()> {
    if requested < T::zero_span() {
        return Err(AvailabilityError::NegativeDuration(format!("{:?}", requested)));
    }
    Ok(())
}

/// Check that every blocker of `party` starts no later than it ends.
///
/// # Errors
/// Returns `AvailabilityError::InvertedBlocker` for the first offending blocker.
pub fn validate_blockers<T: Instant>(party: Party, blockers: &[(T, T)]) -> Result<()> {
    match blockers.iter().position(|(start, end)| start > end) {
        Some(index) => {
            let (start, end) = blockers[index];
            Err(AvailabilityError::InvertedBlocker {
                party,
                index,
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            })
        }
        None => Ok(()),
    }
}
