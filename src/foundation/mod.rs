//! Core validation types and traits.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`BuildError`]
//!
//! Validators are generic over their input type, compose through the
//! combinators in [`crate::combinators`], and report failures through the
//! structured [`ValidationError`] type. Error messages that interpolate
//! runtime values are built by the placeholder formatter in
//! [`crate::format`], which never fails while a diagnostic is being
//! assembled.

pub mod error;
pub mod traits;

pub use error::{BuildError, ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// Convenience for one-off validations.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

/// Validates a value with multiple validators; all must pass.
///
/// Unlike `.and()` chains this does not short-circuit, so the returned
/// collection reports every failure at once.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    errors.into_result(())
}

/// Validates a value with multiple validators; at least one must pass.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

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

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "always fails"))
        }
    }

    #[test]
    fn validate_value_delegates() {
        assert!(validate_value("test", &AlwaysValid).is_ok());
    }

    #[test]
    fn with_all_collects_every_failure() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&valid, &fails, &fails];
        let errors = validate_with_all("test", validators).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn with_any_passes_on_first_success() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid];
        assert!(validate_with_any("test", validators).is_ok());
    }

    #[test]
    fn with_any_fails_when_all_fail() {
        let result = validate_with_any("test", &[&AlwaysFails, &AlwaysFails]);
        assert!(result.is_err());
    }
}
