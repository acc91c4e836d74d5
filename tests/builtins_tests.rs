//! Tests for the built-in comparables.
//!
//! These tests verify the ready-made comparables:
//! - `Always` / `Never` constants
//! - `Exactly` scalar literals
//! - `Range` over every bound type and operator
//! - `Apply` / `Predicate` closures
//! - `Close` float tolerance
//!
//! ## Test Organization
//!
//! 1. **Constants** - trivially true/false comparables
//! 2. **Exactly** - scalar equality and ordering
//! 3. **Range** - full bounds-by-operator grids
//! 4. **Closures** - whole-array and elementwise functions
//! 5. **Close** - tolerance equality and validation

use ndtools::prelude::*;

// ============================================================================
// Constant Tests
// ============================================================================

/// `ALWAYS` matches everything, `NEVER` matches nothing.
#[test]
fn test_always_never() {
    let data = [0, 1, 2];

    assert_eq!(ALWAYS.eq_mask(&data), Mask::trues(3));
    assert_eq!(NEVER.eq_mask(&data), Mask::falses(3));

    assert_eq!(ALWAYS.ne_mask(&data), Mask::falses(3));
    assert_eq!(NEVER.ne_mask(&data), Mask::trues(3));
}

/// The constants compose as neutral/absorbing combinator members.
#[test]
fn test_constants_in_combinators() {
    let data = [0, 1, 2];
    let even = Predicate::new(|v: &i32| v % 2 == 0);

    let conj = Always.and(even);
    assert_eq!(conj.eq_mask(&data).into_vec(), vec![true, false, true]);

    let disj = Never.or(Predicate::new(|v: &i32| v % 2 == 0));
    assert_eq!(disj.eq_mask(&data).into_vec(), vec![true, false, true]);
}

// ============================================================================
// Exactly Tests
// ============================================================================

/// Scalar equality and the supplied ordering primitives.
#[test]
fn test_exactly() {
    let data = [0, 1, 2];

    assert_eq!(Exactly(1).eq_mask(&data).into_vec(), vec![false, true, false]);
    assert_eq!(Exactly(1).ne_mask(&data).into_vec(), vec![true, false, true]);
    assert_eq!(Exactly(1).ge_mask(&data).into_vec(), vec![false, true, true]);
    assert_eq!(Exactly(1).gt_mask(&data).into_vec(), vec![false, false, true]);
    assert_eq!(Exactly(1).le_mask(&data).into_vec(), vec![true, true, false]);
    assert_eq!(Exactly(1).lt_mask(&data).into_vec(), vec![true, false, false]);
}

/// `Exactly` works for non-numeric element types.
#[test]
fn test_exactly_strings() {
    let data = ["a", "b", "a"];

    assert_eq!(
        Exactly("a").eq_mask(&data).into_vec(),
        vec![true, false, true]
    );
}

// ============================================================================
// Range Tests
// ============================================================================

const DATA: [i64; 3] = [0, 1, 2];

fn range(bounds: Bounds) -> Range<i64> {
    Range::with_bounds(1, 2, bounds)
}

/// Equality (interval membership) for every bound type.
#[test]
fn test_range_eq() {
    assert_eq!(range(Bounds::Closed).eq_mask(&DATA).into_vec(), vec![false, true, true]);
    assert_eq!(range(Bounds::ClosedOpen).eq_mask(&DATA).into_vec(), vec![false, true, false]);
    assert_eq!(range(Bounds::OpenClosed).eq_mask(&DATA).into_vec(), vec![false, false, true]);
    assert_eq!(range(Bounds::Open).eq_mask(&DATA).into_vec(), vec![false, false, false]);
}

/// Greater-or-equal ("not below the interval") for every bound type.
#[test]
fn test_range_ge() {
    assert_eq!(range(Bounds::Closed).ge_mask(&DATA).into_vec(), vec![false, true, true]);
    assert_eq!(range(Bounds::ClosedOpen).ge_mask(&DATA).into_vec(), vec![false, true, true]);
    assert_eq!(range(Bounds::OpenClosed).ge_mask(&DATA).into_vec(), vec![false, false, true]);
    assert_eq!(range(Bounds::Open).ge_mask(&DATA).into_vec(), vec![false, false, true]);
}

/// Greater-than ("beyond the interval"), derived from `ge` and `eq`.
#[test]
fn test_range_gt() {
    assert_eq!(range(Bounds::Closed).gt_mask(&DATA).into_vec(), vec![false, false, false]);
    assert_eq!(range(Bounds::ClosedOpen).gt_mask(&DATA).into_vec(), vec![false, false, true]);
    assert_eq!(range(Bounds::OpenClosed).gt_mask(&DATA).into_vec(), vec![false, false, false]);
    assert_eq!(range(Bounds::Open).gt_mask(&DATA).into_vec(), vec![false, false, true]);
}

/// Less-or-equal, derived.
#[test]
fn test_range_le() {
    assert_eq!(range(Bounds::Closed).le_mask(&DATA).into_vec(), vec![true, true, true]);
    assert_eq!(range(Bounds::ClosedOpen).le_mask(&DATA).into_vec(), vec![true, true, false]);
    assert_eq!(range(Bounds::OpenClosed).le_mask(&DATA).into_vec(), vec![true, true, true]);
    assert_eq!(range(Bounds::Open).le_mask(&DATA).into_vec(), vec![true, true, false]);
}

/// Less-than ("below the interval"), derived.
#[test]
fn test_range_lt() {
    assert_eq!(range(Bounds::Closed).lt_mask(&DATA).into_vec(), vec![true, false, false]);
    assert_eq!(range(Bounds::ClosedOpen).lt_mask(&DATA).into_vec(), vec![true, false, false]);
    assert_eq!(range(Bounds::OpenClosed).lt_mask(&DATA).into_vec(), vec![true, true, false]);
    assert_eq!(range(Bounds::Open).lt_mask(&DATA).into_vec(), vec![true, true, false]);
}

/// Inequality, derived.
#[test]
fn test_range_ne() {
    assert_eq!(range(Bounds::Closed).ne_mask(&DATA).into_vec(), vec![true, false, false]);
    assert_eq!(range(Bounds::ClosedOpen).ne_mask(&DATA).into_vec(), vec![true, false, true]);
    assert_eq!(range(Bounds::OpenClosed).ne_mask(&DATA).into_vec(), vec![true, true, false]);
    assert_eq!(range(Bounds::Open).ne_mask(&DATA).into_vec(), vec![true, true, true]);
}

/// Accessors and display formatting.
#[test]
fn test_range_display() {
    let range = Range::new(1, 2);

    assert_eq!(*range.lower(), 1);
    assert_eq!(*range.upper(), 2);
    assert_eq!(range.bounds(), Bounds::ClosedOpen);
    assert_eq!(range.to_string(), "[1, 2)");

    assert_eq!(Range::with_bounds(1, 2, Bounds::Open).to_string(), "(1, 2)");
    assert_eq!(Range::with_bounds(1, 2, Bounds::Closed).to_string(), "[1, 2]");
    assert_eq!(Range::with_bounds(1, 2, Bounds::OpenClosed).to_string(), "(1, 2]");
}

/// Default bounds are half-open.
#[test]
fn test_bounds_default() {
    assert_eq!(Bounds::default(), Bounds::ClosedOpen);
    assert!(Bounds::ClosedOpen.lower_closed());
    assert!(!Bounds::ClosedOpen.upper_closed());
}

// ============================================================================
// Closure Tests
// ============================================================================

/// `Apply` passes the whole slice to its function.
#[test]
fn test_apply() {
    let data = [1, 2, 2, 3];

    let ascending = Apply::new(|values: &[i32]| {
        Mask::from_fn(values.len(), |i| i == 0 || values[i - 1] < values[i])
    });

    assert_eq!(
        ascending.eq_mask(&data).into_vec(),
        vec![true, true, false, true]
    );
}

/// `Predicate` evaluates its function per element.
#[test]
fn test_predicate() {
    let data = ["A", "b"];
    let uppercase = Predicate::new(|s: &&str| s.chars().all(char::is_uppercase));

    assert_eq!(uppercase.eq_mask(&data).into_vec(), vec![true, false]);
    assert_eq!(uppercase.ne_mask(&data).into_vec(), vec![false, true]);
}

// ============================================================================
// Close Tests
// ============================================================================

/// Values within tolerance of the target compare equal.
#[test]
fn test_close() {
    let data = [1.0, 1.0 + 5e-9, 1.000001, 2.0];
    let near_one = Close::new(1.0);

    assert_eq!(
        near_one.eq_mask(&data).into_vec(),
        vec![true, true, true, false]
    );
    assert_eq!(near_one.target(), 1.0);
}

/// Explicit tolerances narrow or widen the acceptance band.
#[test]
fn test_close_explicit_tolerances() {
    let data = [1.0, 1.1, 1.5];

    let tight = Close::with_tolerances(1.0, 0.0, 1e-12).unwrap();
    assert_eq!(tight.eq_mask(&data).into_vec(), vec![true, false, false]);

    let wide = Close::with_tolerances(1.0, 0.2, 0.0).unwrap();
    assert_eq!(wide.eq_mask(&data).into_vec(), vec![true, true, false]);
}

/// NaN is never close to anything.
#[test]
fn test_close_nan() {
    let data = [f64::NAN, 1.0];
    let near_one = Close::new(1.0);

    assert_eq!(near_one.eq_mask(&data).into_vec(), vec![false, true]);
}

/// Invalid tolerances are rejected at construction.
#[test]
fn test_close_invalid_tolerance() {
    let err = Close::with_tolerances(1.0, -1.0, 0.0).unwrap_err();
    assert_eq!(err, CompareError::InvalidTolerance(-1.0));

    assert!(Close::with_tolerances(1.0, 0.0, f64::INFINITY).is_err());
    assert!(Close::with_tolerances(1.0, f64::NAN, 0.0).is_err());
}
