//! Layer 5: Builtins
//!
//! # Purpose
//!
//! This layer provides ready-made comparables built on the capability
//! traits: trivial constants, scalar literals, intervals, closures, float
//! tolerance equality, and (with the `pattern` feature) regex matching.
//! Each builtin supplies only its primitive operator(s) and takes the rest
//! from the derivation layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Builtins ← You are here
//!   ↓
//! Layer 4: Combine
//!   ↓
//! Layer 3: Compare
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trivially true/false comparables.
pub mod constants;

/// Scalar literal comparable.
pub mod exactly;

/// Interval comparable with configurable bounds.
pub mod range;

/// Closure-backed comparables.
pub mod apply;

/// Float equality within tolerance.
pub mod close;

/// Regex matching per element.
#[cfg(feature = "pattern")]
pub mod pattern;
