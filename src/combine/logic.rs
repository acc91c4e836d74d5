//! Boolean combinators for comparable objects.
//!
//! ## Purpose
//!
//! This module composes equatables into larger conditions. [`All`] evaluates
//! as the elementwise conjunction of its members' equality, [`Any`] as the
//! disjunction, and [`Not`] as the negation of a single comparable. The
//! [`Combine`] extension trait gives every equatable the `.and()`, `.or()`,
//! and `.negate()` composition methods.
//!
//! ## Key concepts
//!
//! * **Flattening**: `All::and` and `Any::or` push into the existing node
//!   instead of nesting; `concat` merges two nodes of the same kind.
//! * **Identity**: An empty `All` evaluates all-true, an empty `Any`
//!   all-false — the identities of AND and OR.
//!
//! ## Invariants
//!
//! * A combinator's mask for `values` has exactly `values.len()` elements.
//! * `All(xs) == v` equals the conjunction of elementwise equality over
//!   `xs`; `Any(xs)` the disjunction; `Not(x)` the negation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::ops::{BitAnd, BitOr};

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::primitives::mask::Mask;

// ============================================================================
// All Combinator
// ============================================================================

/// Logical conjunction of equatables.
///
/// Equality evaluates as `(values == member_0) & (values == member_1) & ...`.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [0, 1, 2, 3];
/// let both = All::pair(Range::new(1, 4), Predicate::new(|v: &i32| v % 2 == 1));
///
/// assert_eq!(both.eq_mask(&data).into_vec(), vec![false, true, false, true]);
/// ```
pub struct All<T: 'static> {
    members: Vec<Box<dyn Equatable<T>>>,
}

impl<T: 'static> All<T> {
    /// Create an empty conjunction (evaluates all-true).
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Create a conjunction of two comparables.
    pub fn pair(
        left: impl Equatable<T> + 'static,
        right: impl Equatable<T> + 'static,
    ) -> Self {
        let members: Vec<Box<dyn Equatable<T>>> =
            vec![Box::new(left), Box::new(right)];
        Self { members }
    }

    /// Add a member to the conjunction.
    pub fn push(&mut self, member: impl Equatable<T> + 'static) {
        self.members.push(Box::new(member));
    }

    /// Add a member, flattening into this node rather than nesting.
    #[must_use]
    pub fn and(mut self, other: impl Equatable<T> + 'static) -> Self {
        self.push(other);
        self
    }

    /// Merge another conjunction's members into this one.
    #[must_use]
    pub fn concat(mut self, other: All<T>) -> Self {
        self.members.extend(other.members);
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the conjunction has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: 'static> Default for All<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Equatable<T> for All<T> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        self.members
            .iter()
            .fold(Mask::trues(values.len()), |acc, member| {
                acc & member.eq_mask(values)
            })
    }
}

impl<T: 'static> Debug for All<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "All({} members)", self.members.len())
    }
}

// ============================================================================
// Any Combinator
// ============================================================================

/// Logical disjunction of equatables.
///
/// Equality evaluates as `(values == member_0) | (values == member_1) | ...`.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [0, 1, 2, 3];
/// let either = Any::pair(Exactly(0), Exactly(3));
///
/// assert_eq!(either.eq_mask(&data).into_vec(), vec![true, false, false, true]);
/// ```
pub struct Any<T: 'static> {
    members: Vec<Box<dyn Equatable<T>>>,
}

impl<T: 'static> Any<T> {
    /// Create an empty disjunction (evaluates all-false).
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Create a disjunction of two comparables.
    pub fn pair(
        left: impl Equatable<T> + 'static,
        right: impl Equatable<T> + 'static,
    ) -> Self {
        let members: Vec<Box<dyn Equatable<T>>> =
            vec![Box::new(left), Box::new(right)];
        Self { members }
    }

    /// Add a member to the disjunction.
    pub fn push(&mut self, member: impl Equatable<T> + 'static) {
        self.members.push(Box::new(member));
    }

    /// Add a member, flattening into this node rather than nesting.
    #[must_use]
    pub fn or(mut self, other: impl Equatable<T> + 'static) -> Self {
        self.push(other);
        self
    }

    /// Merge another disjunction's members into this one.
    #[must_use]
    pub fn concat(mut self, other: Any<T>) -> Self {
        self.members.extend(other.members);
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the disjunction has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: 'static> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Equatable<T> for Any<T> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        self.members
            .iter()
            .fold(Mask::falses(values.len()), |acc, member| {
                acc | member.eq_mask(values)
            })
    }
}

impl<T: 'static> Debug for Any<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Any({} members)", self.members.len())
    }
}

// ============================================================================
// Not Combinator
// ============================================================================

/// Logical negation of a comparable.
///
/// Equality evaluates as the elementwise negation of the inner equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C>(C);

impl<C> Not<C> {
    /// Wrap a comparable in a negation.
    pub fn new(inner: C) -> Self {
        Self(inner)
    }

    /// Unwrap the inner comparable.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T, C: Equatable<T>> Equatable<T> for Not<C> {
    fn eq_mask(&self, values: &[T]) -> Mask {
        !self.0.eq_mask(values)
    }
}

// ============================================================================
// Combine Trait
// ============================================================================

/// Composition methods available on every equatable.
///
/// Blanket-implemented; `All` and `Any` shadow `and` / `or` with flattening
/// inherent methods.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let data = [0, 1, 2];
/// let odd_or_two = Predicate::new(|v: &i32| v % 2 == 1).or(Exactly(2));
///
/// assert_eq!(odd_or_two.eq_mask(&data).into_vec(), vec![false, true, true]);
/// ```
pub trait Combine<T: 'static>: Equatable<T> + Sized + 'static {
    /// Conjunction of `self` and `other`.
    fn and(self, other: impl Equatable<T> + 'static) -> All<T> {
        All::pair(self, other)
    }

    /// Disjunction of `self` and `other`.
    fn or(self, other: impl Equatable<T> + 'static) -> Any<T> {
        Any::pair(self, other)
    }

    /// Negation of `self`.
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: 'static, C: Equatable<T> + Sized + 'static> Combine<T> for C {}

// ============================================================================
// Operator Implementations
// ============================================================================

impl<T: 'static, R: Equatable<T> + 'static> BitAnd<R> for All<T> {
    type Output = All<T>;

    fn bitand(self, rhs: R) -> All<T> {
        self.and(rhs)
    }
}

impl<T: 'static, R: Equatable<T> + 'static> BitOr<R> for All<T> {
    type Output = Any<T>;

    fn bitor(self, rhs: R) -> Any<T> {
        Any::pair(self, rhs)
    }
}

impl<T: 'static, R: Equatable<T> + 'static> BitAnd<R> for Any<T> {
    type Output = All<T>;

    fn bitand(self, rhs: R) -> All<T> {
        All::pair(self, rhs)
    }
}

impl<T: 'static, R: Equatable<T> + 'static> BitOr<R> for Any<T> {
    type Output = Any<T>;

    fn bitor(self, rhs: R) -> Any<T> {
        self.or(rhs)
    }
}
