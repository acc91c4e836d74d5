//! Layer 2: Algebra
//!
//! # Purpose
//!
//! This layer provides the pure boolean identities that derive one
//! comparison operator from another. They are reusable building blocks with
//! no trait machinery; the capability traits in the compare layer use them
//! for their provided methods.
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
//! Layer 2: Algebra ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operator-derivation identities over masks.
pub mod ops;
