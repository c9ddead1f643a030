//! Membership validator.

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Allows only values that are members of the configured container.
///
/// Construction fails when the container kind has no membership test. An
/// inapplicable probe at validate time — say, a non-text needle against a
/// text container — counts as "not a member" and rejects; it is never a
/// fault.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let mood = Membership::new(Value::set([
///     Value::from("bad"),
///     Value::from("go away"),
/// ]))
/// .unwrap();
///
/// let schema = Schema::builder("Grump").field("mood", mood).build().unwrap();
/// let mut grump = schema.instantiate();
/// grump.set("mood", "bad").unwrap();
/// assert!(grump.set("mood", "awesome").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Membership {
    allowed: Value,
    binding: Binding,
}

impl Membership {
    pub fn new(allowed: impl Into<Value>) -> Result<Self, ConfigurationError> {
        let allowed = allowed.into();
        if !allowed.supports_membership() {
            return Err(ConfigurationError::NoMembership {
                kind: allowed.kind(),
            });
        }
        Ok(Self {
            allowed,
            binding: Binding::default(),
        })
    }

    /// The configured container.
    #[must_use]
    pub fn allowed(&self) -> &Value {
        &self.allowed
    }
}

impl FieldValidator for Membership {
    fn field_type(&self) -> String {
        format!("Membership({})", self.allowed)
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        if self.allowed.contains(value) {
            Ok(())
        } else {
            Err(self.reject(instance, value, slot))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn obj(validator: impl FieldValidator + 'static) -> Instance {
        Schema::builder("A")
            .field("f", validator)
            .build()
            .unwrap()
            .instantiate()
    }

    #[test]
    fn set_membership() {
        let allowed = Value::set([Value::from("a"), Value::from("b"), Value::from("c")]);
        let mut a = obj(Membership::new(allowed).unwrap());
        a.set("f", "b").unwrap();
        assert!(a.set("f", "d").is_err());
    }

    #[test]
    fn text_membership_is_substring_search() {
        let mut a = obj(Membership::new("xyz").unwrap());
        a.set("f", "z").unwrap();
        // a non-text needle cannot be a substring; that is a rejection,
        // not a fault
        assert!(a.set("f", true).unwrap_err().is_rejection());
    }

    #[test]
    fn map_membership_is_key_lookup() {
        let container = Value::map([("1", Value::from("a"))]);
        let mut a = obj(Membership::new(container).unwrap());
        a.set("f", "1").unwrap();
        assert!(a.set("f", "a").is_err());
    }

    #[test]
    fn non_containers_fail_construction() {
        for bad in [Value::Int(7), Value::Bool(true), Value::None, Value::Complex { re: 8.0, im: 2.0 }] {
            let err = Membership::new(bad).unwrap_err();
            assert!(matches!(err, ConfigurationError::NoMembership { .. }));
        }
    }
}
