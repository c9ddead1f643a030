//! Value transformation.

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::{FuncValue, Value};

/// Stores the result of applying a function to the assigned value.
///
/// Never rejects on its own; it manages storage itself, replacing the
/// incoming value with the function's output before the storage step. In
/// a conjunction, the transformed value is what the right operand sees.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let lower = Transform::new(|v| match v {
///     Value::Text(s) => Value::Text(s.to_lowercase()),
///     other => other,
/// });
///
/// let schema = Schema::builder("A").field("f", lower).build().unwrap();
/// let mut a = schema.instantiate();
/// a.set("f", "SoMe stRInG").unwrap();
/// assert_eq!(a.get("f").unwrap(), &Value::from("some string"));
/// ```
#[derive(Debug, Clone)]
pub struct Transform {
    func: FuncValue,
    binding: Binding,
}

impl Transform {
    pub fn new(func: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self {
            func: FuncValue::new(func),
            binding: Binding::default(),
        }
    }
}

impl FieldValidator for Transform {
    fn field_type(&self) -> String {
        "Transform(<fn>)".to_owned()
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        instance.store(slot, self.func.call(value));
        Ok(())
    }
}
