//! The field-validator contract.
//!
//! A [`FieldValidator`] governs how one named attribute of a structured
//! object may be assigned. The schema builder binds each validator to its
//! attribute name once, at type-declaration time; afterwards every
//! assignment to that attribute routes through [`FieldValidator::assign`]
//! and every read through [`FieldValidator::get`].

use std::fmt;

use crate::foundation::error::{AttributeMissing, ConfigurationError, Error, ValidationError};
use crate::schema::Instance;
use crate::value::Value;

// ============================================================================
// BINDING
// ============================================================================

/// The once-settable attribute name a validator governs.
///
/// Every concrete validator embeds one of these; it centralizes the
/// bind-exactly-once invariant. Binding twice under the same name is a
/// no-op, binding under a different name is a configuration error.
#[derive(Debug, Clone, Default)]
pub struct Binding(Option<String>);

impl Binding {
    pub fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        match &self.0 {
            Some(existing) if existing != name => Err(ConfigurationError::Rebound {
                existing: existing.clone(),
                requested: name.to_owned(),
            }),
            _ => {
                self.0 = Some(name.to_owned());
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// One validation rule bound to one attribute name on one object type.
///
/// Implementors supply [`check`](FieldValidator::check) for plain
/// rejection rules; the default [`assign`](FieldValidator::assign) then
/// stores the value verbatim after a successful check ("auto-store").
/// Validators that transform or coerce the value before storage override
/// `assign` instead and manage the storage step themselves.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let schema = Schema::builder("Server")
///     .field("port", IntType::new().and(InRange::new(1.0, 65535.0)))
///     .field("host", TextType::new())
///     .build()
///     .unwrap();
///
/// let mut server = schema.instantiate();
/// server.set("port", 8080).unwrap();
/// assert!(server.set("port", 0).is_err());
/// assert_eq!(server.get("port").unwrap(), &Value::Int(8080));
/// ```
pub trait FieldValidator: fmt::Debug + Send + Sync {
    /// Human-readable rule identifier with parameter values embedded,
    /// e.g. `"GreaterThan(7)"`.
    fn field_type(&self) -> String;

    /// The attribute name this validator governs, once bound.
    fn bound_name(&self) -> Option<&str>;

    /// Records the governed attribute name. Called exactly once per
    /// validator, by the schema builder, at type-declaration time.
    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError>;

    /// The rejection rule. The default accepts every value.
    ///
    /// `slot` is the attribute the value is headed for; when the
    /// validator runs as an operand of a composition it is the root's
    /// bound name rather than this validator's own.
    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        let _ = (instance, value, slot);
        Ok(())
    }

    /// Validate-and-store. The default runs [`check`](Self::check) and
    /// then stores the value verbatim. Storage-managing validators
    /// override this wholesale.
    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        self.check(instance, &value, slot)?;
        instance.store(slot, value);
        Ok(())
    }

    /// Returns the stored value for the bound attribute.
    fn get<'a>(&self, instance: &'a Instance) -> Result<&'a Value, Error> {
        let name = self.required_name()?;
        instance.stored(name).ok_or_else(|| {
            Error::Missing(AttributeMissing {
                type_name: instance.type_name().to_owned(),
                attribute: name.to_owned(),
            })
        })
    }

    /// Removes and returns the stored value for the bound attribute.
    fn unset(&self, instance: &mut Instance) -> Result<Value, Error> {
        let name = self.required_name()?.to_owned();
        instance.take(&name).ok_or_else(|| {
            Error::Missing(AttributeMissing {
                type_name: instance.type_name().to_owned(),
                attribute: name,
            })
        })
    }

    /// Renders the rejection diagnostic for `value`.
    ///
    /// Names the rule, the owning type, the attribute, and the rejected
    /// value's kind and content. Unbound validators (an error rendered
    /// from inside a not-yet-bound composition) produce an empty string.
    fn render_error(&self, instance: &Instance, value: &Value, slot: Option<&str>) -> String {
        let Some(name) = slot.or_else(|| self.bound_name()) else {
            return String::new();
        };
        let field_type = self.field_type();
        format!(
            "cannot set the {field_type} attribute {owner}.{name} to the {kind} value {value}: \
             the {field_type} condition is not satisfied",
            owner = instance.type_name(),
            kind = value.kind(),
        )
    }

    /// Builds the tagged rejection for `value`, carrying the rendered
    /// diagnostic.
    fn reject(&self, instance: &Instance, value: &Value, slot: &str) -> Error {
        Error::Validation(ValidationError::new(
            self.field_type(),
            Some(slot.to_owned()),
            self.render_error(instance, value, Some(slot)),
        ))
    }

    #[doc(hidden)]
    fn required_name(&self) -> Result<&str, Error> {
        self.bound_name().ok_or_else(|| {
            Error::Configuration(ConfigurationError::Unbound {
                field_type: self.field_type(),
            })
        })
    }
}

impl FieldValidator for Box<dyn FieldValidator> {
    fn field_type(&self) -> String {
        (**self).field_type()
    }

    fn bound_name(&self) -> Option<&str> {
        (**self).bound_name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        (**self).bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        (**self).check(instance, value, slot)
    }

    fn assign(&self, instance: &mut Instance, value: Value, slot: &str) -> Result<(), Error> {
        (**self).assign(instance, value, slot)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods, available on every validator.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let either = TupleType::new().or(ListType::new());
/// assert_eq!(either.field_type(), "TupleType_OR_ListType");
/// ```
pub trait FieldValidatorExt: FieldValidator + Sized {
    /// Conjunction: both operands must accept, left feeds right.
    fn and<R: FieldValidator>(self, other: R) -> And<Self, R> {
        And::new(self, other)
    }

    /// Disjunction: the first accepting operand wins.
    fn or<R: FieldValidator>(self, other: R) -> Or<Self, R> {
        Or::new(self, other)
    }
}

impl<T: FieldValidator> FieldValidatorExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[derive(Debug, Clone, Default)]
    struct Anything {
        binding: Binding,
    }

    impl FieldValidator for Anything {
        fn field_type(&self) -> String {
            "Anything".to_owned()
        }

        fn bound_name(&self) -> Option<&str> {
            self.binding.name()
        }

        fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
            self.binding.bind(name)
        }
    }

    #[test]
    fn default_assign_stores_verbatim() {
        let schema = Schema::builder("A")
            .field("f", Anything::default())
            .build()
            .unwrap();
        let mut a = schema.instantiate();
        a.set("f", 7).unwrap();
        assert_eq!(a.get("f").unwrap(), &Value::Int(7));
    }

    #[test]
    fn binding_is_set_exactly_once() {
        let mut b = Binding::default();
        b.bind("f").unwrap();
        b.bind("f").unwrap();
        let err = b.bind("g").unwrap_err();
        assert!(matches!(err, ConfigurationError::Rebound { .. }));
        assert_eq!(b.name(), Some("f"));
    }

    #[test]
    fn unbound_render_is_empty() {
        let schema = Schema::builder("A")
            .field("f", Anything::default())
            .build()
            .unwrap();
        let a = schema.instantiate();
        let loose = Anything::default();
        assert_eq!(loose.render_error(&a, &Value::Int(1), None), "");
    }
}
