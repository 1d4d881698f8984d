//! Declaration macros.
//!
//! - [`validator!`] declares a validator struct, its `Validate` impl, a
//!   constructor, and a snake_case factory function in one block.
//! - [`all_of!`] / [`any_of!`] AND- or OR-chain several validators.
//! - [`message!`] is the fixed-arity front end to the placeholder
//!   formatter in [`crate::format`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use preflight::validator;
//! use preflight::foundation::ValidationError;
//!
//! validator! {
//!     /// Rejects the empty string.
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::new("not_empty", "must not be empty") }
//!     fn not_empty();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a complete validator.
///
/// `#[derive(Debug, Clone)]` is always applied; add extra derives with an
/// outer `#[derive(...)]`. The `rule` block decides pass/fail, the `error`
/// block builds the [`ValidationError`](crate::foundation::ValidationError)
/// for the failing case.
///
/// Supported shapes:
///
/// ```rust,ignore
/// // Unit validator (zero-sized)
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "must not be empty") }
///     fn not_empty();
/// }
///
/// // Struct with fields, constructor generated from the fields
/// validator! {
///     #[derive(Copy)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
///     fn min_length(min: usize);
/// }
///
/// // Struct with a hand-written constructor body
/// validator! {
///     pub Contains { needle: String } for str;
///     rule(self, input) { input.contains(&self.needle) }
///     error(self, input) { ValidationError::new("contains", "missing substring") }
///     new(needle: impl Into<String>) { Self { needle: needle.into() } }
///     fn contains(needle: impl Into<String>);
/// }
///
/// // Generic over the validated type
/// validator! {
///     #[derive(Copy)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", format!("must be >= {}", self.min)) }
///     fn min(value: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Unit validator (no fields).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // Struct with fields and a hand-written constructor body.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Struct with fields; constructor generated from the field list.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // Generic validator with trait bounds on the type parameter.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // Generic unit validator with no bounds on T (PhantomData carrier).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            _marker: ::std::marker::PhantomData<$gen>,
        }

        impl<$gen> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen>() -> $name<$gen> {
            $name { _marker: ::std::marker::PhantomData }
        }
    };

    // Generic struct with fields and no bounds on T (PhantomData carrier).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
            _marker: ::std::marker::PhantomData<$gen>,
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field,)+ _marker: ::std::marker::PhantomData }
            }
        }

        impl<$gen> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// AND-chains multiple validators.
///
/// ```rust,ignore
/// let validator = all_of![not_blank(), min_length(5), max_length(20)];
/// ```
#[macro_export]
macro_rules! all_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

/// OR-chains multiple validators.
///
/// ```rust,ignore
/// let validator = any_of![exact_length(5), exact_length(10)];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// MESSAGE MACRO
// ============================================================================

/// Renders a placeholder template with a fixed argument list.
///
/// Expands to a [`render`](crate::format::render) call; each argument only
/// needs to implement `Display`.
///
/// ```rust,ignore
/// let msg = message!("{} of %s checks failed", failed, total);
/// ```
#[macro_export]
macro_rules! message {
    ($template:expr $(,)?) => {
        $crate::format::render($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format::render($template, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

// ============================================================================
// TESTS
// ============================================================================
