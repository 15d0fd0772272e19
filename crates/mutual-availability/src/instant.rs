//! Points in time the availability pipeline can work with.
//!
//! The pipeline only needs to order instants and measure the span between two
//! of them. chrono's datetime types and plain `i64` ticks (e.g. minutes since
//! midnight) are supported out of the box.

use std::fmt::Debug;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};

/// An ordered instant with a comparable span type.
pub trait Instant: Copy + Ord + Debug {
    /// The length of time between two instants.
    type Span: Copy + Ord + Debug;

    /// The span from `self` to `later`, i.e. `later - self`.
    ///
    /// Negative when `later` is before `self`, for span types that can be.
    /// Spans too large for `Span` saturate instead of overflowing.
    fn span_until(self, later: Self) -> Self::Span;

    /// The empty span.
    fn zero_span() -> Self::Span;
}

macro_rules! impl_chrono_instant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Instant for $ty {
                type Span = Duration;

                #[inline]
                fn span_until(self, later: Self) -> Duration {
                    later - self
                }

                #[inline]
                fn zero_span() -> Duration {
                    Duration::zero()
                }
            }
        )*
    };
}

impl_chrono_instant!(DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime);

impl Instant for i64 {
    type Span = i64;

    #[inline]
    fn span_until(self, later: Self) -> i64 {
        later.saturating_sub(self)
    }

    #[inline]
    fn zero_span() -> i64 {
        0
    }
}
