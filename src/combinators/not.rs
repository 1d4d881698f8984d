//! NOT combinator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// let validator = contains("forbidden").not();
/// assert!(validator.validate("clean text").is_ok());
/// assert!(validator.validate("forbidden word").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "value matched a rule it must not match",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::contains;

    #[test]
    fn inverts_failure_to_success() {
        let validator = contains("x").not();
        assert!(validator.validate("abc").is_ok());
    }

    #[test]
    fn inverts_success_to_failure() {
        let validator = contains("x").not();
        assert!(validator.validate("axc").is_err());
    }

    #[test]
    fn double_negation_agrees_with_original() {
        let original = contains("x");
        let doubled = not(not(contains("x")));
        for input in ["abc", "axc", ""] {
            assert_eq!(
                original.validate(input).is_ok(),
                doubled.validate(input).is_ok()
            );
        }
    }
}
