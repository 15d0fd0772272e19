//! # mutual-availability
//!
//! Find the time windows in which two independent schedules are both free.
//!
//! Busy intervals ("blockers") from two parties are tagged, merged into one
//! sorted non-overlapping busy timeline, and the gaps of that timeline inside a
//! search range are returned when they are at least as long as the requested
//! duration. The computation is pure: no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`instant`] — The `Instant` trait the pipeline is generic over (chrono, `i64`)
//! - [`block`] — Labeled busy intervals and the tagger/combiner
//! - [`merge`] — Collapse overlapping or touching blocks into a busy timeline
//! - [`window`] — Search ranges, available windows, and gap extraction
//! - [`availability`] — Public entry points with input validation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use mutual_availability::compute_available_windows;
//!
//! let at = |h, m| Utc.with_ymd_and_hms(2018, 7, 20, h, m, 0).unwrap();
//!
//! let windows = compute_available_windows(
//!     &[],
//!     &[(at(12, 30), at(13, 0))],
//!     at(12, 0),
//!     at(13, 30),
//!     Duration::minutes(30),
//! )
//! .unwrap();
//!
//! let pairs: Vec<_> = windows.iter().map(|w| (w.start, w.end)).collect();
//! assert_eq!(pairs, vec![(at(12, 0), at(12, 30)), (at(13, 0), at(13, 30))]);
//! ```

pub mod availability;
pub mod block;
pub mod error;
pub mod instant;
pub mod merge;
pub mod window;

pub use availability::{
    compute_available_windows, first_available_window, validate_blockers, AvailabilityRequest,
};
pub use block::{combine_blockers, tag_blockers, Block, Label, Party};
pub use error::AvailabilityError;
pub use instant::Instant;
pub use merge::merge_blocks;
pub use window::{find_available_windows, gap_candidate, SearchRange, Window};
