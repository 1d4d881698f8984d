//! Optional combinator.

use crate::foundation::{Validate, ValidationError};

/// Lifts a validator over `Option`.
///
/// `None` always passes; `Some(value)` is validated with the inner
/// validator. Combine with [`Required`](crate::validators::Required) when
/// absence itself is an error.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// let validator = in_range(1, 9).optional();
/// assert!(validator.validate(&None).is_ok());
/// assert!(validator.validate(&Some(5)).is_ok());
/// assert!(validator.validate(&Some(12)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            Some(value) => self.inner.validate(value),
            None => Ok(()),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V: Validate>(inner: V) -> Optional<V> {
    Optional::new(inner)
}
