//! Error types for validation failures.
//!
//! [`ValidationError`] is a structured error with an error code, a
//! human-readable message, an optional field path, and ordered parameters.
//! String fields use `Cow<'static, str>` so the common case of static codes
//! and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::format::render;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::foundation::ValidationError;
///
/// // Static strings, zero allocation:
/// let error = ValidationError::new("min_length", "value is too short");
///
/// // Templated message via the placeholder formatter:
/// let error = ValidationError::formatted(
///     "min_length",
///     "length must be at least {}, got %s",
///     &[&5, &3],
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling ("min_length", "required", ...).
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Optional field path ("user.email", "items[0].name", ...).
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters, typically 0-3 per error.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>,

    /// Optional suggestion for fixing the error.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            help: None,
        }
    }

    /// Creates a validation error whose message is built by substituting
    /// `args` into the `{}` / `%s` placeholders of `template`.
    ///
    /// Message construction never fails: a template with too few or too
    /// many placeholders degrades per the formatter rules instead of
    /// masking the validation failure being reported.
    pub fn formatted(
        code: impl Into<Cow<'static, str>>,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Self {
        Self::new(code, render(template, args))
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds help text or a suggestion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Serializes the error for structured reporting.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  help: {help}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "value is required").with_field(field)
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::formatted(
            "min_length",
            "length must be at least {}, got %s",
            &[&min, &actual],
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::formatted(
            "max_length",
            "length must be at most {}, got %s",
            &[&max, &actual],
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::formatted(
            "out_of_range",
            "value must be between {} and {}, got %s",
            &[&min, &max, &actual],
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, for runs that check several
/// validators before reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// BUILD ERROR
// ============================================================================

/// Error returned by fallible validator constructors.
///
/// Validation itself never panics and never fails to *construct* an error;
/// this type only covers invalid validator configuration, caught at build
/// time rather than at validate time.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The supplied regex pattern did not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A range validator was given inverted bounds.
    #[error("invalid bounds: min {min} is greater than max {max}")]
    Bounds { min: usize, max: usize },
}

// ============================================================================
// TESTS
// ============================================================================
