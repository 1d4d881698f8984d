//! Conditional combinator.

use crate::foundation::{Validate, ValidationError};

/// Runs the inner validator only when a predicate on the input holds.
///
/// When the predicate returns `false` the input passes unchecked.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// // Only long-form identifiers need the prefix check
/// let validator = starts_with("id-").when(|s: &str| s.len() > 8);
/// assert!(validator.validate("short").is_ok());
/// assert!(validator.validate("id-12345678").is_ok());
/// assert!(validator.validate("xx-12345678").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct When<V, C> {
    pub(crate) inner: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<V, C>(inner: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(inner, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::starts_with;

    #[test]
    fn skipped_when_condition_false() {
        let validator = starts_with("id-").when(|s: &str| s.len() > 8);
        assert!(validator.validate("short").is_ok());
    }

    #[test]
    fn applied_when_condition_true() {
        let validator = starts_with("id-").when(|s: &str| s.len() > 8);
        assert!(validator.validate("id-12345678").is_ok());
        assert!(validator.validate("xx-12345678").is_err());
    }
}
