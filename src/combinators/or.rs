//! OR combinator - disjunction of field validators.
//!
//! [`Or`] tries the left operand's full validate-and-store; on success it
//! returns immediately, so the right operand — and any transformation it
//! would apply — never runs. On a *rejection* it tries the right operand
//! the same way. Only a tagged rejection counts: a configuration fault, a
//! missing attribute, or a resource failure inside an operand propagates
//! unmodified instead of being swallowed as "the validator said no".

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Disjunction of two field validators.
///
/// When both operands reject, the result is a single rejection attributed
/// to the composed validator.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("Payload")
///     .field("items", TupleType::new().or(ListType::new()))
///     .build()
///     .unwrap();
///
/// let mut payload = schema.instantiate();
/// payload.set("items", vec![Value::Int(1), Value::Int(2)]).unwrap();
/// payload.set("items", Value::tuple([Value::Int(1)])).unwrap();
/// assert!(payload.set("items", "not a sequence").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
    binding: Binding,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            binding: Binding::default(),
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the operands.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> FieldValidator for Or<L, R>
where
    L: FieldValidator,
    R: FieldValidator,
{
    fn field_type(&self) -> String {
        format!("{}_OR_{}", self.left.field_type(), self.right.field_type())
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        match self.left.assign(instance, value.clone(), slot) {
            Ok(()) => return Ok(()),
            Err(err) if err.is_rejection() => {}
            Err(fault) => return Err(fault),
        }
        match self.right.assign(instance, value.clone(), slot) {
            Ok(()) => Ok(()),
            Err(err) if err.is_rejection() => Err(self.reject(instance, &value, slot)),
            Err(fault) => Err(fault),
        }
    }
}
