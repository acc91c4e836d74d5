//! Elementwise ordering capability.
//!
//! ## Purpose
//!
//! [`Orderable`] extends [`Equatable`] with ordering comparisons. The single
//! required primitive is `ge_mask`; the remaining ordering operators (`gt`,
//! `le`, `lt`) are provided methods synthesized from `ge` and `eq` through
//! the algebra layer. Any provided method may be overridden when a direct
//! implementation is cheaper or more precise.
//!
//! ## Key concepts
//!
//! * **Value-side phrasing**: Mask element `i` answers `values[i] OP self`,
//!   so for an interval comparable `ge` means "at or above the interval".
//! * **Derivation**: `gt = ge & !eq`, `le = !ge | eq`, `lt = !ge`.
//!
//! ## Invariants
//!
//! * A mask returned for `values` has exactly `values.len()` elements.
//! * Derived operators satisfy the operator algebra: `gt` and `le` are
//!   complements, as are `lt` and `ge`.

// Internal dependencies
use crate::algebra::ops::{gt_by_ge, le_by_ge, lt_by_ge};
use crate::compare::equality::Equatable;
use crate::primitives::mask::Mask;

// ============================================================================
// Orderable Trait
// ============================================================================

/// Capability for elementwise ordering against a slice of `T`.
///
/// Implementors supply `ge_mask` (plus `eq_mask` from the supertrait); the
/// rest of the ordering set is derived.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// // Values inside [1, 2): equality is interval membership,
/// // `>=` is "not below the interval".
/// struct Window;
///
/// impl Equatable<i64> for Window {
///     fn eq_mask(&self, values: &[i64]) -> Mask {
///         values.iter().map(|&v| v >= 1 && v < 2).collect()
///     }
/// }
///
/// impl Orderable<i64> for Window {
///     fn ge_mask(&self, values: &[i64]) -> Mask {
///         values.iter().map(|&v| v >= 1).collect()
///     }
/// }
///
/// let data = [0, 1, 2];
/// assert_eq!(Window.gt_mask(&data).into_vec(), vec![false, false, true]);
/// assert_eq!(Window.le_mask(&data).into_vec(), vec![true, true, false]);
/// assert_eq!(Window.lt_mask(&data).into_vec(), vec![true, false, false]);
/// ```
pub trait Orderable<T>: Equatable<T> {
    /// Elementwise greater-or-equal: mask element `i` is `values[i] >= self`.
    fn ge_mask(&self, values: &[T]) -> Mask;

    /// Elementwise greater-than, derived as `ge & !eq`.
    fn gt_mask(&self, values: &[T]) -> Mask {
        gt_by_ge(self.ge_mask(values), self.eq_mask(values))
    }

    /// Elementwise less-or-equal, derived as `!ge | eq`.
    fn le_mask(&self, values: &[T]) -> Mask {
        le_by_ge(self.ge_mask(values), self.eq_mask(values))
    }

    /// Elementwise less-than, derived as `!ge`.
    fn lt_mask(&self, values: &[T]) -> Mask {
        lt_by_ge(self.ge_mask(values))
    }
}
