//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive types shared by every other layer: the
//! boolean [`mask`] produced by elementwise comparisons and the crate-wide
//! [`errors`] type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Builtins
//!   ↓
//! Layer 4: Combine
//!   ↓
//! Layer 3: Compare
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Boolean masks for elementwise comparison results.
pub mod mask;

/// Shared error types.
pub mod errors;
