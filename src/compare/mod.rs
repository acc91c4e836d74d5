//! Layer 3: Compare
//!
//! # Purpose
//!
//! This layer defines the capability traits of the crate. A type states
//! which single comparison primitive it supplies ([`equality::Equatable`]
//! needs `eq_mask`, [`ordering::Orderable`] additionally needs `ge_mask`)
//! and the provided methods synthesize every remaining operator from the
//! algebra layer's identities.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Builtins
//!   ↓
//! Layer 4: Combine
//!   ↓
//! Layer 3: Compare ← You are here
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementwise equality capability.
pub mod equality;

/// Elementwise ordering capability.
pub mod ordering;
