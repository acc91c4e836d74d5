//! Boolean masks for elementwise comparison results.
//!
//! ## Purpose
//!
//! A [`Mask`] is the result of comparing array-like data against a
//! comparable object: one boolean per input element. Masks combine
//! elementwise with `&`, `|`, and `!`, and reduce to scalar decisions with
//! [`Mask::all`] and [`Mask::any`].
//!
//! ## Design notes
//!
//! * **Shape**: A mask produced for a slice has exactly one element per
//!   slice element; every elementwise combination requires equal lengths.
//! * **Fallible combination**: [`Mask::intersect`] and [`Mask::union`]
//!   report mismatched lengths as [`CompareError::LengthMismatch`]. The
//!   operator impls are the ergonomic path for masks known to share an
//!   origin and treat a mismatch as a contract violation.
//!
//! ## Invariants
//!
//! * `mask.len()` equals the length of the slice the mask was computed for.
//! * Reductions follow the usual identities: `all` of an empty mask is
//!   `true`, `any` is `false`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{BitAnd, BitOr, Not};

// Internal dependencies
use crate::primitives::errors::CompareError;

// ============================================================================
// Mask Type
// ============================================================================

/// Result of an elementwise comparison: one boolean per input element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a mask of `len` elements, all `true`.
    pub fn trues(len: usize) -> Self {
        Self { bits: vec![true; len] }
    }

    /// Create a mask of `len` elements, all `false`.
    pub fn falses(len: usize) -> Self {
        Self { bits: vec![false; len] }
    }

    /// Create a mask of `len` elements by evaluating `f` at each index.
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> bool) -> Self {
        Self { bits: (0..len).map(|i| f(i)).collect() }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Number of elements in the mask.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the mask has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the boolean at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// View the mask as a slice of booleans.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Iterate over the booleans of the mask.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Consume the mask and return the underlying booleans.
    #[inline]
    pub fn into_vec(self) -> Vec<bool> {
        self.bits
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Returns `true` if every element is `true` (vacuously `true` when empty).
    #[inline]
    pub fn all(&self) -> bool {
        self.bits.iter().all(|&b| b)
    }

    /// Returns `true` if at least one element is `true`.
    #[inline]
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Number of `true` elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    // ========================================================================
    // Elementwise Combination
    // ========================================================================

    /// Elementwise AND, reporting mismatched lengths as an error.
    pub fn intersect(&self, other: &Mask) -> Result<Mask, CompareError> {
        self.zip_with(other, |a, b| a && b)
    }

    /// Elementwise OR, reporting mismatched lengths as an error.
    pub fn union(&self, other: &Mask) -> Result<Mask, CompareError> {
        self.zip_with(other, |a, b| a || b)
    }

    /// Elementwise NOT.
    pub fn invert(mut self) -> Mask {
        for bit in &mut self.bits {
            *bit = !*bit;
        }
        self
    }

    // Combine two masks of equal length with the given boolean operation.
    fn zip_with(
        &self,
        other: &Mask,
        op: impl Fn(bool, bool) -> bool,
    ) -> Result<Mask, CompareError> {
        if self.len() != other.len() {
            return Err(CompareError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .map(|(&a, &b)| op(a, b))
            .collect())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Vec<bool>> for Mask {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for Mask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl IntoIterator for Mask {
    type Item = bool;
    type IntoIter = <Vec<bool> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl BitAnd for Mask {
    type Output = Mask;

    /// Elementwise AND.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different lengths. Use [`Mask::intersect`]
    /// for a fallible combination.
    fn bitand(mut self, rhs: Mask) -> Mask {
        assert_eq!(
            self.len(),
            rhs.len(),
            "mask length mismatch in `&`: {} vs {}",
            self.len(),
            rhs.len(),
        );

        for (bit, r) in self.bits.iter_mut().zip(rhs.bits) {
            *bit = *bit && r;
        }
        self
    }
}

impl BitOr for Mask {
    type Output = Mask;

    /// Elementwise OR.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different lengths. Use [`Mask::union`] for a
    /// fallible combination.
    fn bitor(mut self, rhs: Mask) -> Mask {
        assert_eq!(
            self.len(),
            rhs.len(),
            "mask length mismatch in `|`: {} vs {}",
            self.len(),
            rhs.len(),
        );

        for (bit, r) in self.bits.iter_mut().zip(rhs.bits) {
            *bit = *bit || r;
        }
        self
    }
}

impl Not for Mask {
    type Output = Mask;

    /// Elementwise NOT.
    fn not(self) -> Mask {
        self.invert()
    }
}
