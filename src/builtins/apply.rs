//! Closure-backed comparables.
//!
//! [`Apply`] wraps a whole-array boolean function; [`Predicate`] wraps an
//! elementwise one. Both let arbitrary logic participate in combinator
//! composition without defining a new type.

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::primitives::mask::Mask;

// ============================================================================
// Apply
// ============================================================================

/// Comparable that applies a boolean function to the whole slice.
///
/// The function must return one boolean per input element.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let ascending = Apply::new(|values: &[i32]| {
///     Mask::from_fn(values.len(), |i| i == 0 || values[i - 1] < values[i])
/// });
///
/// assert_eq!(ascending.eq_mask(&[1, 2, 2]).into_vec(), vec![true, true, false]);
/// ```
pub struct Apply<F>(F);

impl<F> Apply<F> {
    /// Wrap a whole-array boolean function.
    pub fn new(func: F) -> Self {
        Self(func)
    }
}

impl<T, F> Equatable<T> for Apply<F>
where
    F: Fn(&[T]) -> Mask,
{
    fn eq_mask(&self, values: &[T]) -> Mask {
        (self.0)(values)
    }
}

impl<F> Debug for Apply<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Apply(..)")
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// Comparable that applies a boolean function to each element.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let uppercase = Predicate::new(|s: &&str| s.chars().all(char::is_uppercase));
///
/// assert_eq!(uppercase.eq_mask(&["A", "b"]).into_vec(), vec![true, false]);
/// ```
pub struct Predicate<F>(F);

impl<F> Predicate<F> {
    /// Wrap an elementwise boolean function.
    pub fn new(func: F) -> Self {
        Self(func)
    }
}

impl<T, F> Equatable<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn eq_mask(&self, values: &[T]) -> Mask {
        values.iter().map(|v| (self.0)(v)).collect()
    }
}

impl<F> Debug for Predicate<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Predicate(..)")
    }
}
