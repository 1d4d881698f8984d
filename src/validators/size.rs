//! Collection size validators over slices.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a slice has at least `min` elements.
    pub MinSize<T> { min: usize } for [T];
    rule(self, input) { input.len() >= self.min }
    error(self, input) {
        ValidationError::formatted(
            "min_size",
            "must have at least {} elements, got %s",
            &[&self.min, &input.len()],
        )
        .with_param("min", self.min.to_string())
        .with_param("actual", input.len().to_string())
    }
    fn min_size(min: usize);
}

crate::validator! {
    /// Validates that a slice has at most `max` elements.
    pub MaxSize<T> { max: usize } for [T];
    rule(self, input) { input.len() <= self.max }
    error(self, input) {
        ValidationError::formatted(
            "max_size",
            "must have at most {} elements, got %s",
            &[&self.max, &input.len()],
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", input.len().to_string())
    }
    fn max_size(max: usize);
}

crate::validator! {
    /// Validates that a slice is not empty.
    pub NotEmptySlice<T> for [T];
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "must not be empty") }
    fn not_empty_slice();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn min_size_cases() {
        let validator = min_size::<i32>(2);
        assert!(validator.validate(&[1, 2]).is_ok());
        assert!(validator.validate(&[1]).is_err());
    }

    #[test]
    fn max_size_cases() {
        let validator = max_size::<&str>(2);
        assert!(validator.validate(&["a", "b"]).is_ok());
        assert!(validator.validate(&["a", "b", "c"]).is_err());
    }

    #[test]
    fn not_empty_slice_cases() {
        let validator = not_empty_slice::<u8>();
        assert!(validator.validate(&[1]).is_ok());
        assert!(validator.validate(&[]).is_err());
    }

    #[test]
    fn size_error_message() {
        let err = min_size::<i32>(3).validate(&[1]).unwrap_err();
        assert_eq!(err.message, "must have at least 3 elements, got 1");
    }

    #[test]
    fn composes_with_combinators() {
        let validator = min_size::<i32>(1).and(max_size(3));
        assert!(validator.validate(&[1, 2]).is_ok());
        assert!(validator.validate(&[]).is_err());
        assert!(validator.validate(&[1, 2, 3, 4]).is_err());
    }
}
