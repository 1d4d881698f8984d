//! Core traits for the validation system.

use crate::combinators::{And, Not, Optional, Or, When, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over the input type and return
/// `Result<(), ValidationError>` for a uniform API.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::foundation::{Validate, ValidationError};
///
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` so validators can target `str`,
    /// `Path`, and `[T]` directly.
    type Input: ?Sized;

    /// Checks the input, returning `Ok(())` on success.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every validator.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// let username = not_blank().and(min_length(3)).and(max_length(20));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("x").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND. Short-circuits on the
    /// first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR. Short-circuits on the
    /// first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator: success becomes failure and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the validator only when the predicate holds; otherwise the
    /// input passes unchecked.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Lifts the validator over `Option`: `None` always passes.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Replaces the error message on failure.
    ///
    /// For messages that interpolate runtime values, use
    /// [`WithMessage::templated`].
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn validate_trait_object_safe() {
        let validator: &dyn Validate<Input = str> = &AlwaysValid;
        assert!(validator.validate("test").is_ok());
    }

    #[test]
    fn ext_methods_compose() {
        let validator = AlwaysValid.and(AlwaysValid).or(AlwaysValid);
        assert!(validator.validate("test").is_ok());
    }
}
