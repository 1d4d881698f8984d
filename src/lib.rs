//! # preflight
//!
//! Small validation helpers plus a positional placeholder message formatter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use preflight::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let username = not_blank().and(min_length(3)).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//!
//! // Build diagnostic messages with sequential {} / %s placeholders
//! let msg = render("expected {} items, found %s", &[&3, &7]);
//! assert_eq!(msg, "expected 3 items, found 7");
//! ```
//!
//! ## Message templates
//!
//! [`format::render`] substitutes `{}` and `%s` placeholders left to right,
//! one per argument. It never fails: surplus arguments are dropped and
//! surplus placeholders stay as literal text, which is the behaviour you
//! want when the string being built *is* the error report.
//!
//! ## Built-in Validators
//!
//! - **String**: [`MinLength`](validators::MinLength), [`NotBlank`](validators::NotBlank),
//!   [`Contains`](validators::Contains), [`Matches`](validators::Matches)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`InRange`](validators::InRange)
//! - **Collection**: [`MinSize`](validators::MinSize), [`MaxSize`](validators::MaxSize)
//! - **Path**: [`Exists`](validators::Exists), [`IsFile`](validators::IsFile)
//! - **Temporal**: [`Before`](validators::Before), [`InPast`](validators::InPast)
//! - **Nullable**: [`Required`](validators::Required)

// ValidationError is the fundamental error type for every validator;
// boxing it would add indirection to each validation call for no benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod format;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
