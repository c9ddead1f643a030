//! Regular-expression validators.

use regex::Regex;

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Allows only text matching the pattern somewhere (search semantics,
/// not full-match).
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("A")
///     .field("f", RegexMatch::new("aa+").unwrap())
///     .build()
///     .unwrap();
/// let mut a = schema.instantiate();
/// a.set("f", "baaaab").unwrap();
/// assert!(a.set("f", "abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: Regex,
    binding: Binding,
}

impl RegexMatch {
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            binding: Binding::default(),
        })
    }
}

impl FieldValidator for RegexMatch {
    fn field_type(&self) -> String {
        format!("RegexMatch({})", self.pattern.as_str())
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        match value {
            Value::Text(s) if self.pattern.is_match(s) => Ok(()),
            _ => Err(self.reject(instance, value, slot)),
        }
    }
}

/// Allows only text that does not match the pattern anywhere.
#[derive(Debug, Clone)]
pub struct NotRegexMatch {
    pattern: Regex,
    binding: Binding,
}

impl NotRegexMatch {
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            binding: Binding::default(),
        })
    }
}

impl FieldValidator for NotRegexMatch {
    fn field_type(&self) -> String {
        format!("NotRegexMatch({})", self.pattern.as_str())
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        match value {
            Value::Text(s) if !self.pattern.is_match(s) => Ok(()),
            _ => Err(self.reject(instance, value, slot)),
        }
    }
}
