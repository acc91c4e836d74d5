//! Trivially true/false comparables.
//!
//! [`Always`] matches every element, [`Never`] matches none. They are the
//! absorbing and neutral elements of combinator composition and useful as
//! placeholders while building conditions incrementally.

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::primitives::mask::Mask;

// ============================================================================
// Always
// ============================================================================

/// Comparable that is always evaluated as `true`.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// assert_eq!(ALWAYS.eq_mask(&[0, 1, 2]).into_vec(), vec![true, true, true]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Always;

/// Comparable that is always evaluated as `true`.
pub const ALWAYS: Always = Always;

impl<T> Equatable<T> for Always {
    fn eq_mask(&self, values: &[T]) -> Mask {
        Mask::trues(values.len())
    }
}

// ============================================================================
// Never
// ============================================================================

/// Comparable that is always evaluated as `false`.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// assert_eq!(NEVER.eq_mask(&[0, 1, 2]).into_vec(), vec![false, false, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Never;

/// Comparable that is always evaluated as `false`.
pub const NEVER: Never = Never;

impl<T> Equatable<T> for Never {
    fn eq_mask(&self, values: &[T]) -> Mask {
        Mask::falses(values.len())
    }
}
