//! Elementwise equality capability.
//!
//! ## Purpose
//!
//! [`Equatable`] is the base capability of the crate: a type that can answer,
//! for every element of a slice, whether that element is equal to it. The
//! single required method is `eq_mask`; inequality is a provided method
//! derived through the algebra layer, and may be overridden when a direct
//! implementation is cheaper.
//!
//! ## Key concepts
//!
//! * **Value-side phrasing**: Mask element `i` answers `values[i] == self`.
//! * **Derivation**: `ne_mask` defaults to `ne_by_eq(eq_mask)`.
//!
//! ## Invariants
//!
//! * A mask returned for `values` has exactly `values.len()` elements.
//! * `ne_mask` is the elementwise negation of `eq_mask`.

// Internal dependencies
use crate::algebra::ops::ne_by_eq;
use crate::primitives::mask::Mask;

// ============================================================================
// Equatable Trait
// ============================================================================

/// Capability for elementwise equality against a slice of `T`.
///
/// Implementors supply `eq_mask` only; `ne_mask` is derived.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// struct Even;
///
/// impl Equatable<i64> for Even {
///     fn eq_mask(&self, values: &[i64]) -> Mask {
///         values.iter().map(|v| v % 2 == 0).collect()
///     }
/// }
///
/// let data = [0, 1, 2];
/// assert_eq!(Even.eq_mask(&data).into_vec(), vec![true, false, true]);
/// assert_eq!(Even.ne_mask(&data).into_vec(), vec![false, true, false]);
/// ```
pub trait Equatable<T> {
    /// Elementwise equality: mask element `i` is `values[i] == self`.
    fn eq_mask(&self, values: &[T]) -> Mask;

    /// Elementwise inequality, derived as the negation of `eq_mask`.
    fn ne_mask(&self, values: &[T]) -> Mask {
        ne_by_eq(self.eq_mask(values))
    }
}
