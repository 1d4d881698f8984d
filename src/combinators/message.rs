//! Message-override combinator.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationError};
use crate::format::render;

/// Replaces the error message of a validator.
///
/// The original error code and params are preserved. For messages that
/// interpolate runtime values, [`WithMessage::templated`] runs the
/// configured values through the placeholder formatter once, at
/// construction.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::prelude::*;
///
/// let validator = min_length(8).with_message("password is too short");
/// let err = validator.validate("hunter").unwrap_err();
/// assert_eq!(err.message, "password is too short");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a combinator that replaces the error message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a combinator whose message is a placeholder template
    /// rendered with `args`.
    ///
    /// ```rust,ignore
    /// let validator = WithMessage::templated(
    ///     min_length(8),
    ///     "{} must be at least %s characters",
    ///     &[&"password", &8],
    /// );
    /// ```
    pub fn templated(inner: V, template: &str, args: &[&dyn fmt::Display]) -> Self {
        Self::new(inner, render(template, args))
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut original| {
            original.message = Cow::Owned(self.message.clone());
            if let Some(code) = &self.code {
                original.code = code.clone();
            }
            original
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
