//! Miscellaneous predicate checks.

use std::fmt;
use std::sync::Arc;

use crate::value::{Value, ValueKind};

/// A user-supplied predicate parameter for [`Satisfies`] and
/// [`NotSatisfies`].
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(func: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

crate::field_validator! {
    /// Rejects the absent value, allows everything else.
    pub NotNone;
    rule(value) { value.kind() != ValueKind::None }
}

crate::field_validator! {
    /// Allows only callable values.
    pub Callable;
    rule(value) { value.kind() == ValueKind::Func }
}

crate::field_validator! {
    /// Allows only map values carrying the given key.
    pub HasAttr { key: String };
    rule(self, value) {
        matches!(value, Value::Map(entries) if entries.contains_key(self.key.as_str()))
    }
    new(key: impl Into<String>) => (key.into())
}

crate::field_validator! {
    /// Allows only values the supplied predicate accepts.
    pub Satisfies { predicate: Predicate };
    rule(self, value) { self.predicate.test(value) }
    new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) => (Predicate::new(predicate))
}

crate::field_validator! {
    /// Allows only values the supplied predicate rejects.
    pub NotSatisfies { predicate: Predicate };
    rule(self, value) { !self.predicate.test(value) }
    new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) => (Predicate::new(predicate))
}

crate::field_validator! {
    /// Allows only values of exactly the given length.
    pub Length { length: usize };
    rule(self, value) { value.len() == Some(self.length) }
}

crate::field_validator! {
    /// Allows only values of at least the given length.
    pub MinLength { min_length: usize };
    rule(self, value) { value.len().is_some_and(|l| l >= self.min_length) }
}

crate::field_validator! {
    /// Allows only values of at most the given length.
    pub MaxLength { max_length: usize };
    rule(self, value) { value.len().is_some_and(|l| l <= self.max_length) }
}

crate::field_validator! {
    /// Allows only text naming an existing filesystem path.
    pub ExistingPath;
    rule(value) {
        matches!(value, Value::Text(p) if std::path::Path::new(p).exists())
    }
}

// ============================================================================
// TESTS
// ============================================================================
