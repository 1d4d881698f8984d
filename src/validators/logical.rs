//! Boolean and nullable validators.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a flag is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "must be true") }
    fn is_true();
}

crate::validator! {
    /// Validates that a flag is `false`.
    pub IsFalse for bool;
    rule(input) { !*input }
    error(input) { ValidationError::new("is_false", "must be false") }
    fn is_false();
}

crate::validator! {
    /// Validates that an `Option` holds a value.
    ///
    /// The inverse of [`Optional`](crate::combinators::Optional): absence
    /// is the failure case.
    pub Required<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) { ValidationError::new("required", "value is required") }
    fn required();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn is_true_cases() {
        assert!(is_true().validate(&true).is_ok());
        assert!(is_true().validate(&false).is_err());
    }

    #[test]
    fn is_false_cases() {
        assert!(is_false().validate(&false).is_ok());
        assert!(is_false().validate(&true).is_err());
    }

    #[test]
    fn required_cases() {
        let validator = required::<String>();
        assert!(validator.validate(&Some("x".to_string())).is_ok());
        assert!(validator.validate(&None).is_err());
    }

    #[test]
    fn required_error_code() {
        let err = required::<i32>().validate(&None).unwrap_err();
        assert_eq!(err.code, "required");
    }
}
