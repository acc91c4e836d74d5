//! Regex matching per element.
//!
//! ## Purpose
//!
//! [`Match`] tests every element of a string slice against a regular
//! expression. The whole element must match (the pattern is anchored), so
//! `Match::new("a+")` matches `"aa"` but not `"ab"`.
//!
//! Available with the default `pattern` feature (requires `std`).

// External dependencies
use regex::{Regex, RegexBuilder};

// Internal dependencies
use crate::compare::equality::Equatable;
use crate::primitives::errors::CompareError;
use crate::primitives::mask::Mask;

// ============================================================================
// Match
// ============================================================================

/// Comparable that matches a regular expression against each element.
///
/// Works with any element type that derefs to a string slice.
///
/// # Examples
///
/// ```rust
/// use ndtools::prelude::*;
///
/// let repeated_a = Match::new("a+")?;
/// assert_eq!(repeated_a.eq_mask(&["a", "aa", "ab"]).into_vec(), vec![true, true, false]);
///
/// let greeting = Match::case_insensitive("hello")?;
/// assert_eq!(greeting.eq_mask(&["HELLO", "bye"]).into_vec(), vec![true, false]);
/// # Result::<(), CompareError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    regex: Regex,
    pattern: String,
}

impl Match {
    /// Compile a case-sensitive full-match pattern.
    pub fn new(pattern: &str) -> Result<Self, CompareError> {
        Self::build(pattern, true)
    }

    /// Compile a case-insensitive full-match pattern.
    pub fn case_insensitive(pattern: &str) -> Result<Self, CompareError> {
        Self::build(pattern, false)
    }

    /// The pattern as supplied, without the anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn build(pattern: &str, case_sensitive: bool) -> Result<Self, CompareError> {
        // Anchor the pattern so that the whole element must match.
        let anchored = format!("^(?:{pattern})$");

        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| CompareError::InvalidPattern(e.to_string()))?;

        Ok(Self { regex, pattern: pattern.to_owned() })
    }
}

impl<T: AsRef<str>> Equatable<T> for Match {
    fn eq_mask(&self, values: &[T]) -> Mask {
        values
            .iter()
            .map(|v| self.regex.is_match(v.as_ref()))
            .collect()
    }
}
