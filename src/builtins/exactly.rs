//! Scalar literal comparable.
//!
//! [`Exactly`] lifts a single value into a comparable, so that plain scalars
//! can participate in combinator composition alongside ranges and
//! predicates.

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::compare::ordering::Orderable;
use crate::primitives::mask::Mask;

// ============================================================================
// Exactly
// ============================================================================

/// Comparable wrapping a single value.
///
/// Equality is elementwise `==` against the wrapped value; ordering
/// supplies `>=` and `>` directly, with `<=` and `<` derived.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [0, 1, 2];
/// assert_eq!(Exactly(1).eq_mask(&data).into_vec(), vec![false, true, false]);
/// assert_eq!(Exactly(1).ge_mask(&data).into_vec(), vec![false, true, true]);
/// assert_eq!(Exactly(1).lt_mask(&data).into_vec(), vec![true, false, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exactly<T>(pub T);

impl<T: PartialEq> Equatable<T> for Exactly<T> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        values.iter().map(|v| v == &self.0).collect()
    }
}

impl<T: PartialOrd> Orderable<T> for Exactly<T> {
    fn ge_mask(&self, values: &[T]) -> Mask {
        values.iter().map(|v| v >= &self.0).collect()
    }

    // Direct implementation; equivalent to the derived `ge & !eq`.
    fn gt_mask(&self, values: &[T]) -> Mask {
        values.iter().map(|v| v > &self.0).collect()
    }
}
