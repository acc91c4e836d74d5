//! Error types for comparison operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can arise while building or
//! combining comparables. The derivation and combination layers add no error
//! taxonomy of their own; failures come from mask shape mismatches and from
//! validating builtin parameters at construction time.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both lengths of a
//!   mismatched pair).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for comparison operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Two masks combined elementwise must have the same number of elements.
    LengthMismatch {
        /// Number of elements in the left mask.
        left: usize,
        /// Number of elements in the right mask.
        right: usize,
    },

    /// Tolerances must be finite and non-negative.
    InvalidTolerance(f64),

    /// The supplied pattern failed to compile as a regular expression.
    InvalidPattern(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CompareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: left mask has {left} elements, right has {right}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be finite and >= 0)")
            }
            Self::InvalidPattern(msg) => write!(f, "Invalid pattern: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CompareError {}
