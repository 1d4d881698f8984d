//! Numeric range validators.
//!
//! Generic over any `PartialOrd + Display + Copy` type, so they work for
//! integers, floats, and anything else with a total enough ordering.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::formatted("min", "value must be at least {}, got %s", &[&self.min, input])
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::formatted("max", "value must be at most {}, got %s", &[&self.max, input])
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    fn in_range(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================
