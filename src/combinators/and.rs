//! AND combinator - conjunction of field validators.
//!
//! [`And`] runs the left operand's full validate-and-store, re-reads the
//! (possibly transformed) stored value, feeds it to the right operand's
//! full validate-and-store, re-reads again, and finally stores the
//! twice-processed value under the composed bound name. Because the left
//! operand's output becomes the right operand's input, operand order
//! matters whenever either operand transforms values — an intentional
//! property, not a defect.

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator};
use crate::schema::Instance;
use crate::value::Value;

/// Conjunction of two field validators.
///
/// Either operand's rejection is re-raised as a single rejection
/// attributed to the composed validator; any non-rejection fault
/// propagates unchanged.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("Job")
///     .field("workdir", TextType::new().and(ExistingPath::new()))
///     .build()
///     .unwrap();
///
/// let mut job = schema.instantiate();
/// let cwd = std::env::current_dir().unwrap();
/// job.set("workdir", cwd.to_string_lossy().as_ref()).unwrap();
/// assert!(job.set("workdir", 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct And<L, R> {
    left: L,
    right: R,
    binding: Binding,
}

impl<L, R> And<L, R> {
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

impl<L, R> And<L, R>
where
    L: FieldValidator,
    R: FieldValidator,
{
    fn run_operands(
        &self,
        instance: &mut Instance,
        value: Value,
        slot: &str,
    ) -> Result<Value, Error> {
        self.left.assign(instance, value, slot)?;
        let after_left = instance
            .stored(slot)
            .cloned()
            .ok_or_else(|| instance.missing(slot))?;
        self.right.assign(instance, after_left, slot)?;
        instance
            .stored(slot)
            .cloned()
            .ok_or_else(|| instance.missing(slot))
    }
}

impl<L, R> FieldValidator for And<L, R>
where
    L: FieldValidator,
    R: FieldValidator,
{
    fn field_type(&self) -> String {
        format!("{}_AND_{}", self.left.field_type(), self.right.field_type())
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        match self.run_operands(instance, value.clone(), slot) {
            Ok(processed) => {
                instance.store(slot, processed);
                Ok(())
            }
            Err(err) if err.is_rejection() => Err(self.reject(instance, &value, slot)),
            Err(fault) => Err(fault),
        }
    }
}
