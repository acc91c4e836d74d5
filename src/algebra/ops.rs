//! Operator-derivation identities over masks.
//!
//! ## Purpose
//!
//! Each function in this module derives one comparison operator from the
//! elementwise result of another, as a one-line boolean identity. They are
//! usable on their own, without implementing any trait; the capability
//! traits build their provided methods on top of them.
//!
//! ## Key concepts
//!
//! * **Naming**: `a_by_b` derives operator `a` from the mask of operator
//!   `b`. Identities that the operator algebra phrases with `==` or `!=`
//!   additionally take the equality mask.
//! * **Totality**: For a consistent total order the derived mask equals the
//!   direct operator; for partial orders (e.g., floats with NaN) the
//!   identity holds wherever the primitive operator is decisive.
//!
//! ## Invariants
//!
//! * Every function is pure and preserves mask length.
//! * All masks passed to one call must stem from the same input slice.

// Internal dependencies
use crate::primitives::mask::Mask;

// ============================================================================
// Equality Derivations
// ============================================================================

/// Derive `==` from `!=`: `eq = !ne`.
#[inline]
pub fn eq_by_ne(ne: Mask) -> Mask {
    !ne
}

/// Derive `!=` from `==`: `ne = !eq`.
#[inline]
pub fn ne_by_eq(eq: Mask) -> Mask {
    !eq
}

// ============================================================================
// Greater-or-Equal Derivations
// ============================================================================

/// Derive `>=` from `>` and `==`: `ge = gt | eq`.
#[inline]
pub fn ge_by_gt(gt: Mask, eq: Mask) -> Mask {
    gt | eq
}

/// Derive `>=` from `<=` and `==`: `ge = !le | eq`.
#[inline]
pub fn ge_by_le(le: Mask, eq: Mask) -> Mask {
    !le | eq
}

/// Derive `>=` from `<`: `ge = !lt`.
#[inline]
pub fn ge_by_lt(lt: Mask) -> Mask {
    !lt
}

// ============================================================================
// Greater-Than Derivations
// ============================================================================

/// Derive `>` from `>=` and `==`: `gt = ge & !eq`.
#[inline]
pub fn gt_by_ge(ge: Mask, eq: Mask) -> Mask {
    ge & !eq
}

/// Derive `>` from `<=`: `gt = !le`.
#[inline]
pub fn gt_by_le(le: Mask) -> Mask {
    !le
}

/// Derive `>` from `<` and `==`: `gt = !lt & !eq`.
#[inline]
pub fn gt_by_lt(lt: Mask, eq: Mask) -> Mask {
    !lt & !eq
}

// ============================================================================
// Less-or-Equal Derivations
// ============================================================================

/// Derive `<=` from `>=` and `==`: `le = !ge | eq`.
#[inline]
pub fn le_by_ge(ge: Mask, eq: Mask) -> Mask {
    !ge | eq
}

/// Derive `<=` from `>`: `le = !gt`.
#[inline]
pub fn le_by_gt(gt: Mask) -> Mask {
    !gt
}

/// Derive `<=` from `<` and `==`: `le = lt | eq`.
#[inline]
pub fn le_by_lt(lt: Mask, eq: Mask) -> Mask {
    lt | eq
}

// ============================================================================
// Less-Than Derivations
// ============================================================================

/// Derive `<` from `>=`: `lt = !ge`.
#[inline]
pub fn lt_by_ge(ge: Mask) -> Mask {
    !ge
}

/// Derive `<` from `>` and `==`: `lt = !gt & !eq`.
#[inline]
pub fn lt_by_gt(gt: Mask, eq: Mask) -> Mask {
    !gt & !eq
}

/// Derive `<` from `<=` and `==`: `lt = le & !eq`.
#[inline]
pub fn lt_by_le(le: Mask, eq: Mask) -> Mask {
    le & !eq
}
