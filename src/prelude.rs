//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use preflight::prelude::*;
//!
//! let username = not_blank().and(min_length(3)).and(max_length(20));
//! let report = render("{} failed %s checks", &[&"username", &2]);
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    BuildError, Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
    validate_value, validate_with_all, validate_with_any,
};

// ============================================================================
// FORMATTER
// ============================================================================

pub use crate::format::{OrNull, render};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{
    And, Not, Optional, Or, When, WithMessage, and, not, optional, or, when, with_message,
};
