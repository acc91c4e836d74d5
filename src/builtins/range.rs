//! Interval comparable with configurable bounds.
//!
//! ## Purpose
//!
//! [`Range`] implements equivalence with an interval: equality is interval
//! membership, and ordering asks where a value sits relative to the whole
//! interval ("at or above" means not below the lower bound). The interval
//! supplies only `eq_mask` and `ge_mask`; `gt`, `le`, and `lt` come from the
//! derivation layer and remain correct for all four bound types.
//!
//! ## Key concepts
//!
//! * **Bounds**: `[]`, `[)` (default), `(]`, and `()` via [`Bounds`].
//! * **Value-side phrasing**: `values[i] >= range` is true iff the element
//!   is not below the interval, `values[i] > range` iff it is beyond the
//!   upper bound.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::compare::ordering::Orderable;
use crate::primitives::mask::Mask;

// ============================================================================
// Bounds
// ============================================================================

/// Bound type of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounds {
    /// Lower-closed and upper-closed: `[lower, upper]`.
    Closed,

    /// Lower-closed and upper-open: `[lower, upper)`.
    ///
    /// This is the default, matching the usual half-open convention.
    #[default]
    ClosedOpen,

    /// Lower-open and upper-closed: `(lower, upper]`.
    OpenClosed,

    /// Lower-open and upper-open: `(lower, upper)`.
    Open,
}

impl Bounds {
    /// Returns `true` if the lower bound belongs to the interval.
    #[inline]
    pub const fn lower_closed(&self) -> bool {
        matches!(self, Bounds::Closed | Bounds::ClosedOpen)
    }

    /// Returns `true` if the upper bound belongs to the interval.
    #[inline]
    pub const fn upper_closed(&self) -> bool {
        matches!(self, Bounds::Closed | Bounds::OpenClosed)
    }

    // Bracket symbols for display.
    const fn symbols(&self) -> (char, char) {
        match self {
            Bounds::Closed => ('[', ']'),
            Bounds::ClosedOpen => ('[', ')'),
            Bounds::OpenClosed => ('(', ']'),
            Bounds::Open => ('(', ')'),
        }
    }
}

// ============================================================================
// Range
// ============================================================================

/// Comparable that implements equivalence with an interval.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [0, 1, 2];
///
/// assert_eq!(Range::new(1, 2).eq_mask(&data).into_vec(), vec![false, true, false]);
/// assert_eq!(Range::new(1, 2).lt_mask(&data).into_vec(), vec![true, false, false]);
/// assert_eq!(Range::new(1, 2).gt_mask(&data).into_vec(), vec![false, false, true]);
///
/// let closed = Range::with_bounds(1, 2, Bounds::Closed);
/// assert_eq!(closed.eq_mask(&data).into_vec(), vec![false, true, true]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    lower: T,
    upper: T,
    bounds: Bounds,
}

impl<T> Range<T> {
    /// Create a half-open interval `[lower, upper)`.
    pub fn new(lower: T, upper: T) -> Self {
        Self::with_bounds(lower, upper, Bounds::ClosedOpen)
    }

    /// Create an interval with explicit bound types.
    pub fn with_bounds(lower: T, upper: T, bounds: Bounds) -> Self {
        Self { lower, upper, bounds }
    }

    /// Lower bound of the interval.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Upper bound of the interval.
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Bound type of the interval.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl<T: PartialOrd> Range<T> {
    // Element is not below the interval.
    #[inline]
    fn above_lower(&self, value: &T) -> bool {
        if self.bounds.lower_closed() {
            value >= &self.lower
        } else {
            value > &self.lower
        }
    }

    // Element is not beyond the interval.
    #[inline]
    fn below_upper(&self, value: &T) -> bool {
        if self.bounds.upper_closed() {
            value <= &self.upper
        } else {
            value < &self.upper
        }
    }
}

impl<T: PartialOrd> Equatable<T> for Range<T> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        values
            .iter()
            .map(|v| self.above_lower(v) && self.below_upper(v))
            .collect()
    }
}

impl<T: PartialOrd> Orderable<T> for Range<T> {
    fn ge_mask(&self, values: &[T]) -> Mask {
        values.iter().map(|v| self.above_lower(v)).collect()
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (open, close) = self.bounds.symbols();
        write!(f, "{open}{}, {}{close}", self.lower, self.upper)
    }
}
