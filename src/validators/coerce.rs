//! Numeric coercion.

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Accepts numbers as-is and coerces numeric text before storage.
///
/// - `Int`, `Float`, and `Complex` values pass through untouched.
/// - `Bool` is rejected explicitly — a boolean is not numeric here even
///   though it could be read as 0/1.
/// - Text is parsed as an integer first, then as a float, and the parsed
///   number is what gets stored: `"7"` stores `Int(7)`, `"7.0"` stores
///   `Float(7.0)`.
/// - Everything else, and unparseable text, is rejected.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("A")
///     .field("f", NumericCoerce::new())
///     .build()
///     .unwrap();
/// let mut a = schema.instantiate();
/// a.set("f", "7").unwrap();
/// assert_eq!(a.get("f").unwrap(), &Value::Int(7));
/// a.set("f", "7.0").unwrap();
/// assert_eq!(a.get("f").unwrap(), &Value::Float(7.0));
/// assert!(a.set("f", true).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumericCoerce {
    binding: Binding,
}

impl NumericCoerce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a floating-point parse of `text` succeeds.
    #[must_use]
    pub fn is_convertible(text: &str) -> bool {
        text.trim().parse::<f64>().is_ok()
    }

    /// Integral parse first; floating-point parse on integral-parse
    /// failure.
    #[must_use]
    pub fn text_to_number(text: &str) -> Option<Value> {
        let text = text.trim();
        if let Ok(i) = text.parse::<i64>() {
            return Some(Value::Int(i));
        }
        text.parse::<f64>().ok().map(Value::Float)
    }
}

impl FieldValidator for NumericCoerce {
    fn field_type(&self) -> String {
        "NumericCoerce".to_owned()
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        let stored = match &value {
            Value::Bool(_) => return Err(self.reject(instance, &value, slot)),
            Value::Int(_) | Value::Float(_) | Value::Complex { .. } => value,
            Value::Text(s) => match Self::text_to_number(s) {
                Some(n) => n,
                None => return Err(self.reject(instance, &value, slot)),
            },
            _ => return Err(self.reject(instance, &value, slot)),
        };
        instance.store(slot, stored);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use pretty_assertions::assert_eq;

    fn obj() -> Instance {
        Schema::builder("A")
            .field("f", NumericCoerce::new())
            .build()
            .unwrap()
            .instantiate()
    }

    #[test]
    fn numbers_pass_through() {
        let mut a = obj();
        a.set("f", 7).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Int(7));
        a.set("f", -7.0).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Float(-7.0));
        a.set("f", Value::Complex { re: 1.0, im: 2.0 }).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Complex { re: 1.0, im: 2.0 });
    }

    #[test]
    fn text_coerces_integral_first() {
        let mut a = obj();
        a.set("f", "7").unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Int(7));
        a.set("f", "7.0").unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Float(7.0));
        a.set("f", "-13.123").unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Float(-13.123));
    }

    #[test]
    fn rejections() {
        let mut a = obj();
        assert!(a.set("f", Value::tuple([Value::Int(7), Value::Int(0)])).is_err());
        assert!(a.set("f", "seven").is_err());
        assert!(a.set("f", Value::None).is_err());
        assert!(a.set("f", true).is_err());
        assert!(a.set("f", false).is_err());
    }

    #[test]
    fn helpers() {
        assert!(NumericCoerce::is_convertible("7"));
        assert!(NumericCoerce::is_convertible(" -13.5 "));
        assert!(!NumericCoerce::is_convertible("seven"));
        assert_eq!(NumericCoerce::text_to_number("7"), Some(Value::Int(7)));
        assert_eq!(NumericCoerce::text_to_number("7.5"), Some(Value::Float(7.5)));
        assert_eq!(NumericCoerce::text_to_number("x"), None);
    }
}
