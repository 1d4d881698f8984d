//! Built-in validators.
//!
//! # Categories
//!
//! - **String**: length and content checks
//! - **Numeric**: range checks, generic over `PartialOrd`
//! - **Collection**: slice size checks
//! - **Logical**: booleans and `Option`
//! - **Path**: filesystem existence checks
//! - **Temporal**: UTC timestamp ordering checks
//!
//! Every validator reports failures through
//! [`ValidationError`](crate::foundation::ValidationError); messages that
//! interpolate runtime values are rendered by the placeholder formatter.
//!
//! # Examples
//!
//! ```rust,ignore
//! use preflight::prelude::*;
//!
//! let username = not_blank().and(min_length(3)).and(max_length(20));
//! let age = in_range(18, 120);
//! let tags = min_size::<String>(1).and(max_size(10));
//! ```

pub mod content;
pub mod length;
pub mod logical;
pub mod path;
pub mod range;
pub mod size;
pub mod temporal;

pub use content::{
    Alphanumeric, Contains, EndsWith, Matches, StartsWith, alphanumeric, contains, ends_with,
    matches, starts_with,
};
pub use length::{
    ExactLength, LengthBetween, MaxLength, MinLength, NotBlank, NotEmpty, exact_length,
    length_between, max_length, min_length, not_blank, not_empty,
};
pub use logical::{IsFalse, IsTrue, Required, is_false, is_true, required};
pub use path::{
    Exists, HasExtension, IsDir, IsFile, exists, has_extension, is_dir, is_file,
};
pub use range::{InRange, Max, Min, in_range, max, min};
pub use size::{MaxSize, MinSize, NotEmptySlice, max_size, min_size, not_empty_slice};
pub use temporal::{After, Before, InFuture, InPast, after, before, in_future, in_past};
