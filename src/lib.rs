//! # ndtools — Elementwise Comparison Toolkit
//!
//! Comparison tools for array-like data: capability traits that derive the
//! missing comparison operators from one user-supplied primitive, plus
//! boolean combinators for composing comparable objects.
//!
//! ## What is an elementwise comparison?
//!
//! Comparing an array against a condition does not yield a single boolean;
//! it yields one boolean per element — a [`Mask`](prelude::Mask). A
//! comparable object (a range, a literal, a predicate) answers, for every
//! element of a slice, how that element relates to it. Masks combine
//! elementwise with `&`, `|`, and `!`, and reduce to scalar decisions with
//! `all` and `any`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndtools::prelude::*;
//!
//! let data = [0.0, 1.5, 3.0, 4.5];
//!
//! // A half-open range [1, 4): supplies equality and `>=`,
//! // every other operator is derived.
//! let inside = Range::new(1.0, 4.0);
//!
//! assert_eq!(inside.eq_mask(&data).into_vec(), vec![false, true, true, false]);
//! assert_eq!(inside.lt_mask(&data).into_vec(), vec![true, false, false, false]);
//! assert!(inside.eq_mask(&data).any());
//! ```
//!
//! ## Combinators
//!
//! Comparables compose under AND/OR semantics with [`All`](prelude::All) and
//! [`Any`](prelude::Any):
//!
//! ```rust
//! use ndtools::prelude::*;
//!
//! let data = [0, 1, 2, 3, 4];
//!
//! let even = Predicate::new(|v: &i32| v % 2 == 0);
//! let small = Range::new(0, 3);
//!
//! // Elementwise conjunction: even AND inside [0, 3).
//! let both = even.and(small);
//! assert_eq!(both.eq_mask(&data).into_vec(), vec![true, false, true, false, false]);
//!
//! // Elementwise disjunction: exactly 3 OR exactly 4.
//! let either = Exactly(3).or(Exactly(4));
//! assert_eq!(either.eq_mask(&data).into_vec(), vec![false, false, false, true, true]);
//! ```
//!
//! ## Deriving operators for your own types
//!
//! Implement [`Equatable`](prelude::Equatable) with a single `eq_mask` and
//! inequality comes for free; implement [`Orderable`](prelude::Orderable)
//! with a single `ge_mask` on top of that and the full ordering set
//! (`gt`, `le`, `lt`) is synthesized:
//!
//! ```rust
//! use ndtools::prelude::*;
//!
//! struct Even;
//!
//! impl Equatable<i64> for Even {
//!     fn eq_mask(&self, values: &[i64]) -> Mask {
//!         values.iter().map(|v| v % 2 == 0).collect()
//!     }
//! }
//!
//! let data = [0, 1, 2];
//! assert_eq!(Even.ne_mask(&data).into_vec(), vec![false, true, false]);
//! ```
//!
//! The underlying boolean identities are also available as free functions in
//! [`algebra::ops`] for use without any trait:
//!
//! ```rust
//! use ndtools::algebra::ops::ge_by_lt;
//! use ndtools::prelude::*;
//!
//! let data = [0, 1, 2];
//! let lt = Exactly(1).lt_mask(&data);
//! assert_eq!(ge_by_lt(lt).into_vec(), vec![false, true, true]);
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible constructors and mask combination return
//! `Result<_, CompareError>`; the `?` operator is idiomatic:
//!
//! ```rust
//! use ndtools::prelude::*;
//!
//! let close = Close::with_tolerances(1.0_f64, 1e-6, 1e-9)?;
//! let mask = close.eq_mask(&[1.0, 1.1]);
//! assert_eq!(mask.into_vec(), vec![true, false]);
//! # Result::<(), CompareError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency; the regex-backed
//! [`Match`](prelude::Match) builtin requires `std` and stays behind the
//! default `pattern` feature:
//!
//! ```toml
//! [dependencies]
//! ndtools = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - masks and shared error types.
pub mod primitives;

// Layer 2: Algebra - pure operator-derivation identities.
pub mod algebra;

// Layer 3: Compare - elementwise capability traits.
pub mod compare;

// Layer 4: Combine - boolean combinators.
pub mod combine;

// Layer 5: Builtins - ready-made comparables.
pub mod builtins;

// Standard ndtools prelude.
pub mod prelude {
    pub use crate::builtins::apply::{Apply, Predicate};
    pub use crate::builtins::close::Close;
    pub use crate::builtins::constants::{Always, Never, ALWAYS, NEVER};
    pub use crate::builtins::exactly::Exactly;
    #[cfg(feature = "pattern")]
    pub use crate::builtins::pattern::Match;
    pub use crate::builtins::range::{Bounds, Range};
    pub use crate::combine::logic::{All, Any, Combine, Not};
    pub use crate::compare::equality::Equatable;
    pub use crate::compare::ordering::Orderable;
    pub use crate::primitives::errors::CompareError;
    pub use crate::primitives::mask::Mask;
}
