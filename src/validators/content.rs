//! String content validators.

use regex::Regex;

use crate::foundation::{BuildError, Validate, ValidationError};

// ============================================================================
// SUBSTRING CHECKS
// ============================================================================

crate::validator! {
    /// Validates that a string contains a substring.
    pub Contains { needle: String } for str;
    rule(self, input) { input.contains(&self.needle) }
    error(self, input) {
        ValidationError::formatted("contains", "must contain {}", &[&self.needle])
            .with_param("needle", self.needle.clone())
    }
    new(needle: impl Into<String>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<String>);
}

crate::validator! {
    /// Validates that a string starts with a prefix.
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(&self.prefix) }
    error(self, input) {
        ValidationError::formatted("starts_with", "must start with {}", &[&self.prefix])
            .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(&self.suffix) }
    error(self, input) {
        ValidationError::formatted("ends_with", "must end with {}", &[&self.suffix])
            .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Validates that every character is alphanumeric.
    ///
    /// The empty string passes; chain with
    /// [`NotEmpty`](crate::validators::NotEmpty) to forbid it.
    pub Alphanumeric for str;
    rule(input) { input.chars().all(char::is_alphanumeric) }
    error(input) {
        ValidationError::new("alphanumeric", "must contain only alphanumeric characters")
    }
    fn alphanumeric();
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// The pattern is compiled once at construction; an invalid pattern is a
/// [`BuildError`], not a validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::validators::Matches;
/// use preflight::foundation::Validate;
///
/// let validator = Matches::new(r"^[a-z]+-\d+$")?;
/// assert!(validator.validate("abc-123").is_ok());
/// assert!(validator.validate("ABC").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles `pattern` into a validator.
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.regex.is_match(input) {
            Ok(())
        } else {
            Err(
                ValidationError::formatted("pattern", "must match pattern {}", &[&self.pattern()])
                    .with_param("pattern", self.pattern().to_owned()),
            )
        }
    }
}

/// Creates a [`Matches`] validator from a pattern.
pub fn matches(pattern: &str) -> Result<Matches, BuildError> {
    Matches::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_cases() {
        let validator = contains("bc");
        assert!(validator.validate("abcd").is_ok());
        assert!(validator.validate("acbd").is_err());
    }

    #[test]
    fn contains_error_message() {
        let err = contains("bc").validate("x").unwrap_err();
        assert_eq!(err.message, "must contain bc");
        assert_eq!(err.param("needle"), Some("bc"));
    }

    #[test]
    fn starts_with_cases() {
        let validator = starts_with("id-");
        assert!(validator.validate("id-42").is_ok());
        assert!(validator.validate("42-id").is_err());
    }

    #[test]
    fn ends_with_cases() {
        let validator = ends_with(".rs");
        assert!(validator.validate("main.rs").is_ok());
        assert!(validator.validate("main.go").is_err());
    }

    #[test]
    fn alphanumeric_cases() {
        assert!(alphanumeric().validate("abc123").is_ok());
        assert!(alphanumeric().validate("").is_ok());
        assert!(alphanumeric().validate("abc 123").is_err());
        assert!(alphanumeric().validate("abc-123").is_err());
    }

    #[test]
    fn matches_valid_pattern() {
        let validator = matches(r"^\d{3}$").unwrap();
        assert!(validator.validate("123").is_ok());
        assert!(validator.validate("12").is_err());
        assert!(validator.validate("abcd").is_err());
    }

    #[test]
    fn matches_invalid_pattern_is_build_error() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn matches_error_carries_pattern() {
        let validator = matches(r"^\d+$").unwrap();
        let err = validator.validate("abc").unwrap_err();
        assert_eq!(err.param("pattern"), Some(r"^\d+$"));
    }
}
