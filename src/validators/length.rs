//! String length validators.
//!
//! Length is measured in Unicode scalar values (`chars().count()`), not
//! bytes, so accented text is counted the way a user would count it.

use crate::foundation::{BuildError, Validate, ValidationError};

// ============================================================================
// EMPTINESS
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// Validates that a string contains at least one non-whitespace
    /// character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("not_blank", "must not be blank") }
    fn not_blank();
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

crate::validator! {
    /// Validates that a string has exactly `length` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        ValidationError::formatted(
            "exact_length",
            "length must be exactly {}, got %s",
            &[&self.length, &input.chars().count()],
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn exact_length(length: usize);
}

// ============================================================================
// RANGE
// ============================================================================

/// Validates that a string length falls within an inclusive range.
///
/// More direct than `min_length(a).and(max_length(b))` when both bounds
/// apply, and the constructor rejects inverted bounds up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBetween {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthBetween {
    /// Creates a length range validator.
    ///
    /// Returns [`BuildError::Bounds`] if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, BuildError> {
        if min > max {
            return Err(BuildError::Bounds { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Validate for LengthBetween {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len >= self.min && len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(self.min, self.max, len))
        }
    }
}

/// Creates a [`LengthBetween`] validator.
pub fn length_between(min: usize, max: usize) -> Result<LengthBetween, BuildError> {
    LengthBetween::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
