//! Tests for the operator-derivation identities.
//!
//! These tests verify every derivation function against the operator it
//! claims to implement, on the same fixture: the values `[0, 1, 2]` compared
//! against the scalar `1`.
//!
//! ## Test Organization
//!
//! 1. **Fixture** - Primitive masks for `[0, 1, 2]` vs `1`
//! 2. **Equality Derivations** - eq/ne from each other
//! 3. **Ordering Derivations** - ge/gt/le/lt from one another

use ndtools::algebra::ops::{
    eq_by_ne, ge_by_gt, ge_by_le, ge_by_lt, gt_by_ge, gt_by_le, gt_by_lt,
    le_by_ge, le_by_gt, le_by_lt, lt_by_ge, lt_by_gt, lt_by_le, ne_by_eq,
};
use ndtools::prelude::*;

// ============================================================================
// Fixture
// ============================================================================

const DATA: [i64; 3] = [0, 1, 2];

/// Primitive mask for `v == 1`: `[false, true, false]`.
fn eq() -> Mask {
    Exactly(1).eq_mask(&DATA)
}

/// Primitive mask for `v != 1`: `[true, false, true]`.
fn ne() -> Mask {
    Exactly(1).ne_mask(&DATA)
}

/// Primitive mask for `v >= 1`: `[false, true, true]`.
fn ge() -> Mask {
    Exactly(1).ge_mask(&DATA)
}

/// Primitive mask for `v > 1`: `[false, false, true]`.
fn gt() -> Mask {
    Exactly(1).gt_mask(&DATA)
}

/// Primitive mask for `v <= 1`: `[true, true, false]`.
fn le() -> Mask {
    Exactly(1).le_mask(&DATA)
}

/// Primitive mask for `v < 1`: `[true, false, false]`.
fn lt() -> Mask {
    Exactly(1).lt_mask(&DATA)
}

// ============================================================================
// Equality Derivation Tests
// ============================================================================

#[test]
fn test_eq_by_ne() {
    assert_eq!(eq_by_ne(ne()), eq());
}

#[test]
fn test_ne_by_eq() {
    assert_eq!(ne_by_eq(eq()), ne());
}

// ============================================================================
// Greater-or-Equal Derivation Tests
// ============================================================================

#[test]
fn test_ge_by_gt() {
    assert_eq!(ge_by_gt(gt(), eq()), ge());
}

#[test]
fn test_ge_by_le() {
    assert_eq!(ge_by_le(le(), eq()), ge());
}

#[test]
fn test_ge_by_lt() {
    assert_eq!(ge_by_lt(lt()), ge());
}

// ============================================================================
// Greater-Than Derivation Tests
// ============================================================================

#[test]
fn test_gt_by_ge() {
    assert_eq!(gt_by_ge(ge(), eq()), gt());
}

#[test]
fn test_gt_by_le() {
    assert_eq!(gt_by_le(le()), gt());
}

#[test]
fn test_gt_by_lt() {
    assert_eq!(gt_by_lt(lt(), eq()), gt());
}

// ============================================================================
// Less-or-Equal Derivation Tests
// ============================================================================

#[test]
fn test_le_by_ge() {
    assert_eq!(le_by_ge(ge(), eq()), le());
}

#[test]
fn test_le_by_gt() {
    assert_eq!(le_by_gt(gt()), le());
}

#[test]
fn test_le_by_lt() {
    assert_eq!(le_by_lt(lt(), eq()), le());
}

// ============================================================================
// Less-Than Derivation Tests
// ============================================================================

#[test]
fn test_lt_by_ge() {
    assert_eq!(lt_by_ge(ge()), lt());
}

#[test]
fn test_lt_by_gt() {
    assert_eq!(lt_by_gt(gt(), eq()), lt());
}

#[test]
fn test_lt_by_le() {
    assert_eq!(lt_by_le(le(), eq()), lt());
}

// ============================================================================
// Fixture Sanity
// ============================================================================

/// The primitive masks themselves match the expected vectors.
#[test]
fn test_primitive_masks() {
    assert_eq!(eq().into_vec(), vec![false, true, false]);
    assert_eq!(ne().into_vec(), vec![true, false, true]);
    assert_eq!(ge().into_vec(), vec![false, true, true]);
    assert_eq!(gt().into_vec(), vec![false, false, true]);
    assert_eq!(le().into_vec(), vec![true, true, false]);
    assert_eq!(lt().into_vec(), vec![true, false, false]);
}
