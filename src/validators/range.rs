//! Numeric range checks.
//!
//! All of these apply to `Int` and `Float` values; anything non-numeric
//! (booleans included) is rejected outright.

crate::field_validator! {
    /// Allows only strictly positive numbers.
    pub Positive;
    rule(value) { value.as_number().is_some_and(|n| n > 0.0) }
}

crate::field_validator! {
    /// Allows only numbers greater than or equal to zero.
    pub SemiPositive;
    rule(value) { value.as_number().is_some_and(|n| n >= 0.0) }
}

crate::field_validator! {
    /// Allows only strictly negative numbers.
    pub Negative;
    rule(value) { value.as_number().is_some_and(|n| n < 0.0) }
}

crate::field_validator! {
    /// Allows only numbers less than or equal to zero.
    pub SemiNegative;
    rule(value) { value.as_number().is_some_and(|n| n <= 0.0) }
}

crate::field_validator! {
    /// Allows only non-zero numbers.
    pub NotZero;
    rule(value) { value.as_number().is_some_and(|n| n != 0.0) }
}

crate::field_validator! {
    /// Allows only numbers strictly greater than the threshold.
    pub GreaterThan { threshold: f64 };
    rule(self, value) { value.as_number().is_some_and(|n| n > self.threshold) }
}

crate::field_validator! {
    /// Allows only numbers greater than or equal to the threshold.
    pub GreaterThanOrEqual { threshold: f64 };
    rule(self, value) { value.as_number().is_some_and(|n| n >= self.threshold) }
}

crate::field_validator! {
    /// Allows only numbers strictly less than the threshold.
    pub LessThan { threshold: f64 };
    rule(self, value) { value.as_number().is_some_and(|n| n < self.threshold) }
}

crate::field_validator! {
    /// Allows only numbers less than or equal to the threshold.
    pub LessThanOrEqual { threshold: f64 };
    rule(self, value) { value.as_number().is_some_and(|n| n <= self.threshold) }
}

crate::field_validator! {
    /// Allows only numbers within the inclusive range.
    pub InRange { lower_bound: f64, upper_bound: f64 };
    rule(self, value) {
        value
            .as_number()
            .is_some_and(|n| self.lower_bound <= n && n <= self.upper_bound)
    }
}

// ============================================================================
// TESTS
// ============================================================================
