//! Layer 4: Combine
//!
//! # Purpose
//!
//! This layer provides the boolean combinators: [`logic::All`] and
//! [`logic::Any`] aggregate comparables under AND/OR semantics,
//! [`logic::Not`] negates one, and the [`logic::Combine`] extension trait
//! gives every equatable the `.and()` / `.or()` / `.negate()` composition
//! methods.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Builtins
//!   ↓
//! Layer 4: Combine ← You are here
//!   ↓
//! Layer 3: Compare
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Boolean combinators and the composition trait.
pub mod logic;
