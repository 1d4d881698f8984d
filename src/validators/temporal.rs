//! Temporal validators over UTC timestamps.

use chrono::{DateTime, Utc};

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a timestamp is strictly before a bound.
    #[derive(Copy, PartialEq, Eq)]
    pub Before { bound: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidationError::formatted("before", "must be before {}, got %s", &[&self.bound, input])
    }
    fn before(bound: DateTime<Utc>);
}

crate::validator! {
    /// Validates that a timestamp is strictly after a bound.
    #[derive(Copy, PartialEq, Eq)]
    pub After { bound: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::formatted("after", "must be after {}, got %s", &[&self.bound, input])
    }
    fn after(bound: DateTime<Utc>);
}

crate::validator! {
    /// Validates that a timestamp is in the past relative to `Utc::now()`
    /// at validate time.
    pub InPast for DateTime<Utc>;
    rule(input) { *input < Utc::now() }
    error(input) {
        ValidationError::formatted("in_past", "{} is not in the past", &[input])
    }
    fn in_past();
}

crate::validator! {
    /// Validates that a timestamp is in the future relative to `Utc::now()`
    /// at validate time.
    pub InFuture for DateTime<Utc>;
    rule(input) { *input > Utc::now() }
    error(input) {
        ValidationError::formatted("in_future", "{} is not in the future", &[input])
    }
    fn in_future();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).single().unwrap()
    }

    fn far_future() -> DateTime<Utc> {
        Utc.timestamp_opt(4_102_444_800, 0).single().unwrap() // 2100-01-01
    }

    #[test]
    fn before_cases() {
        let validator = before(far_future());
        assert!(validator.validate(&epoch()).is_ok());
        assert!(validator.validate(&far_future()).is_err()); // strict bound
    }

    #[test]
    fn after_cases() {
        let validator = after(epoch());
        assert!(validator.validate(&far_future()).is_ok());
        assert!(validator.validate(&epoch()).is_err());
    }

    #[test]
    fn in_past_and_in_future() {
        assert!(in_past().validate(&epoch()).is_ok());
        assert!(in_past().validate(&far_future()).is_err());
        assert!(in_future().validate(&far_future()).is_ok());
        assert!(in_future().validate(&epoch()).is_err());
    }

    #[test]
    fn before_error_interpolates_both_timestamps() {
        let err = before(epoch()).validate(&far_future()).unwrap_err();
        assert!(err.message.starts_with("must be before 1970"));
        assert!(err.message.contains("got 2100"));
    }
}
