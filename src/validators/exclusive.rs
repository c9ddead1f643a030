//! Mutually-exclusive pair constraint.

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Requires that exactly one of this attribute and its peer is truthy.
///
/// The check is inactive until both sides hold a non-`None` value — a
/// peer never assigned reads as `None` — so values can be reset by
/// assigning `None` first. Declare it symmetrically on both attributes,
/// each naming the other.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("A")
///     .field("f1", MutuallyExclusive::new("f2"))
///     .field("f2", MutuallyExclusive::new("f1"))
///     .build()
///     .unwrap();
///
/// let mut a = schema.instantiate();
/// a.set("f1", true).unwrap();
/// assert!(a.set("f2", true).is_err());
/// a.set("f2", false).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MutuallyExclusive {
    other: String,
    binding: Binding,
}

impl MutuallyExclusive {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
            binding: Binding::default(),
        }
    }

    /// The peer attribute's name.
    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }
}

impl FieldValidator for MutuallyExclusive {
    fn field_type(&self) -> String {
        format!("MutuallyExclusive({})", self.other)
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        if matches!(value, Value::None) {
            return Ok(());
        }
        match instance.stored(&self.other) {
            None | Some(Value::None) => Ok(()),
            Some(other) if value.is_truthy() == other.is_truthy() => {
                Err(self.reject(instance, value, slot))
            }
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn pair() -> Instance {
        Schema::builder("A")
            .field("f", MutuallyExclusive::new("g"))
            .field("g", MutuallyExclusive::new("f"))
            .build()
            .unwrap()
            .instantiate()
    }

    #[test]
    fn inactive_until_both_sides_are_set() {
        let mut a = pair();
        a.set("f", Value::None).unwrap();
        a.set("g", Value::None).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::None);
        assert_eq!(a.get("g").unwrap(), &Value::None);
    }

    #[test]
    fn exactly_one_truthy_side_is_required() {
        let mut a = pair();
        a.set("g", true).unwrap();
        assert!(a.set("f", true).is_err());
        assert!(a.set("f", 9).is_err());
        a.set("f", false).unwrap();
    }

    #[test]
    fn resetting_through_none_reopens_the_pair() {
        let mut a = pair();
        a.set("g", true).unwrap();
        assert!(a.set("f", "s").is_err());
        a.set("f", Value::None).unwrap();
        a.set("g", Value::None).unwrap();
        a.set("f", "s").unwrap();
        assert!(a.set("g", 9).is_err());
        a.set("g", 0).unwrap();
    }

    #[test]
    fn unassigned_peer_counts_as_absent() {
        let mut a = pair();
        a.set("f", true).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Bool(true));
    }

    #[test]
    fn both_falsy_is_rejected_once_active() {
        let mut a = pair();
        a.set("f", 0).unwrap();
        assert!(a.set("g", false).is_err());
    }
}
