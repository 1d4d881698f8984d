//! Validator combinators.
//!
//! Combinators wrap one or two validators and change how they compose:
//!
//! - [`And`] / [`Or`] / [`Not`] - boolean composition
//! - [`When`] - conditional validation
//! - [`Optional`] - lift over `Option`
//! - [`WithMessage`] - override the error message (optionally from a
//!   placeholder template)
//!
//! All of them are reachable through the fluent methods on
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};
