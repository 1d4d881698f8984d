//! OR combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one must pass; validation short-circuits on the first success.
/// When both fail, the right validator's error is returned with the left
/// error's code recorded as a param.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// let validator = exact_length(5).or(exact_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("helloworld").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_err) = self.left.validate(input) else {
            return Ok(());
        };
        self.right
            .validate(input)
            .map_err(|right_err| right_err.with_param("also_failed", left_err.code.clone()))
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
