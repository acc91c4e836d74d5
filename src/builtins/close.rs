//! Float equality within tolerance.
//!
//! ## Purpose
//!
//! Exact float equality is rarely what elementwise comparison wants.
//! [`Close`] implements the usual tolerance test: an element is equal to the
//! target when `|v - target| <= abs_tol + rel_tol * |target|`. NaN elements
//! are never close to anything.
//!
//! ## Invariants
//!
//! * Tolerances are finite and non-negative (validated by
//!   [`Close::with_tolerances`]).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::primitives::errors::CompareError;
use crate::primitives::mask::Mask;

// ============================================================================
// Default Tolerances
// ============================================================================

/// Default relative tolerance.
const DEFAULT_REL_TOL: f64 = 1e-5;

/// Default absolute tolerance.
const DEFAULT_ABS_TOL: f64 = 1e-8;

// ============================================================================
// Close
// ============================================================================

/// Comparable testing float equality within tolerance.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [1.0, 1.0 + 5e-9, 2.0];
/// let near_one = Close::new(1.0);
///
/// assert_eq!(near_one.eq_mask(&data).into_vec(), vec![true, true, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Close<T> {
    target: T,
    rel_tol: T,
    abs_tol: T,
}

impl<T: Float> Close<T> {
    /// Create a tolerance comparable with the default tolerances
    /// (`rel_tol = 1e-5`, `abs_tol = 1e-8`).
    pub fn new(target: T) -> Self {
        Self {
            target,
            rel_tol: T::from(DEFAULT_REL_TOL).unwrap_or_else(T::zero),
            abs_tol: T::from(DEFAULT_ABS_TOL).unwrap_or_else(T::zero),
        }
    }

    /// Create a tolerance comparable with explicit tolerances.
    ///
    /// Each tolerance must be finite and non-negative.
    pub fn with_tolerances(
        target: T,
        rel_tol: T,
        abs_tol: T,
    ) -> Result<Self, CompareError> {
        for tol in [rel_tol, abs_tol] {
            if !tol.is_finite() || tol < T::zero() {
                return Err(CompareError::InvalidTolerance(
                    tol.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }

        Ok(Self { target, rel_tol, abs_tol })
    }

    /// The target value.
    pub fn target(&self) -> T {
        self.target
    }

    // The acceptance threshold around the target.
    #[inline]
    fn threshold(&self) -> T {
        self.abs_tol + self.rel_tol * self.target.abs()
    }
}

impl<T: Float> Equatable<T> for Close<T> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        let threshold = self.threshold();

        // NaN propagates through the subtraction and fails the comparison.
        values
            .iter()
            .map(|&v| (v - self.target).abs() <= threshold)
            .collect()
    }
}
