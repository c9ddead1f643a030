//! The attribute binder: schemas and instances.
//!
//! A [`Schema`] is the declaration of a structured-object type: an ordered
//! list of `(name, validator)` pairs. Building the schema binds every
//! validator to its attribute name, once, in declaration order. The schema
//! is per-type metadata — all instances of the type share the same bound
//! validators; only the stored values live per instance.
//!
//! # Examples
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let schema = Schema::builder("ExistingFile")
//!     .field("path", ExistingPath::new())
//!     .field("name", TextType::new())
//!     .field("size", IntType::new())
//!     .build()
//!     .unwrap();
//!
//! let mut file = schema.instantiate();
//! file.set("name", "data.bin").unwrap();
//! assert!(file.set("size", "not a number").is_err());
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::foundation::{AttributeMissing, ConfigurationError, Error, FieldValidator};
use crate::value::Value;

// ============================================================================
// SCHEMA
// ============================================================================

/// A structured-object type: its name and its bound validators, in
/// declaration order.
#[derive(Debug)]
pub struct Schema {
    type_name: String,
    fields: IndexMap<String, Box<dyn FieldValidator>>,
}

impl Schema {
    /// Starts a type declaration.
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &dyn FieldValidator)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), &**v))
    }

    /// Looks up the validator bound to `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&dyn FieldValidator> {
        self.fields.get(name).map(|v| &**v)
    }

    /// Constructs an instance of this type with no attributes stored yet.
    ///
    /// Takes the shared schema handle; clone the `Arc` to build several
    /// instances of the same type.
    #[must_use]
    pub fn instantiate(self: Arc<Self>) -> Instance {
        Instance {
            schema: self,
            values: IndexMap::new(),
        }
    }
}

/// Accumulates `(name, validator)` pairs for a type declaration.
///
/// [`build`](SchemaBuilder::build) performs the binding: each validator's
/// [`bind`](FieldValidator::bind) is called with its declared name, in
/// declaration order. Duplicate names are a configuration error. Because
/// the builder takes validators by value, one validator instance cannot be
/// declared under two names — the reuse the source left undefined is ruled
/// out by construction.
pub struct SchemaBuilder {
    type_name: String,
    fields: Vec<(String, Box<dyn FieldValidator>)>,
}

impl SchemaBuilder {
    /// Declares an attribute governed by `validator`.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, validator: impl FieldValidator + 'static) -> Self {
        self.fields.push((name.into(), Box::new(validator)));
        self
    }

    /// Binds every declared validator and yields the finished type.
    pub fn build(self) -> Result<Arc<Schema>, ConfigurationError> {
        let mut fields: IndexMap<String, Box<dyn FieldValidator>> =
            IndexMap::with_capacity(self.fields.len());
        for (name, mut validator) in self.fields {
            if fields.contains_key(&name) {
                return Err(ConfigurationError::DuplicateField {
                    type_name: self.type_name,
                    name,
                });
            }
            validator.bind(&name)?;
            fields.insert(name, validator);
        }
        Ok(Arc::new(Schema {
            type_name: self.type_name,
            fields,
        }))
    }
}

// ============================================================================
// INSTANCE
// ============================================================================

/// One structured object: a shared schema plus this object's stored
/// attribute values.
#[derive(Debug)]
pub struct Instance {
    schema: Arc<Schema>,
    values: IndexMap<String, Value>,
}

impl Instance {
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.schema.type_name()
    }

    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Assigns `value` to the attribute `name`, routing through the bound
    /// validator's validate-and-store.
    ///
    /// A rejected assignment leaves the previously stored value (or its
    /// absence) untouched, even when a composed validator had already
    /// staged a partially transformed value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), Error> {
        let schema = Arc::clone(&self.schema);
        let validator = schema
            .field(name)
            .ok_or_else(|| self.unknown_field(name))?;
        let prior = self.values.get(name).cloned();
        let outcome = validator.assign(self, value.into(), name);
        if outcome.is_err() {
            match prior {
                Some(v) => self.store(name, v),
                None => {
                    self.values.shift_remove(name);
                }
            }
        }
        outcome
    }

    /// Reads the attribute `name` through its validator.
    pub fn get(&self, name: &str) -> Result<&Value, Error> {
        let validator = self
            .schema
            .field(name)
            .ok_or_else(|| self.unknown_field(name))?;
        validator.get(self)
    }

    /// Removes the attribute `name` through its validator, returning the
    /// stored value.
    pub fn unset(&mut self, name: &str) -> Result<Value, Error> {
        let schema = Arc::clone(&self.schema);
        let validator = schema
            .field(name)
            .ok_or_else(|| self.unknown_field(name))?;
        validator.unset(self)
    }

    /// Whether the attribute currently holds a value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Raw slot read, bypassing the validator. This is the peer-attribute
    /// access cross-field validators use.
    #[must_use]
    pub fn stored(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Raw slot write, bypassing the validator. This is the storage step
    /// validators invoke once a value is accepted.
    pub fn store(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    fn unknown_field(&self, name: &str) -> Error {
        Error::Configuration(ConfigurationError::UnknownField {
            type_name: self.type_name().to_owned(),
            name: name.to_owned(),
        })
    }

    pub(crate) fn missing(&self, name: &str) -> Error {
        Error::Missing(AttributeMissing {
            type_name: self.type_name().to_owned(),
            attribute: name.to_owned(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{IntType, TextType};
    use pretty_assertions::assert_eq;

    fn person() -> Arc<Schema> {
        Schema::builder("Person")
            .field("name", TextType::new())
            .field("age", IntType::new())
            .build()
            .unwrap()
    }

    #[test]
    fn binding_happens_in_declaration_order() {
        let schema = person();
        let names: Vec<_> = schema.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "age"]);
        for (name, validator) in schema.fields() {
            assert_eq!(validator.bound_name(), Some(name));
        }
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let err = Schema::builder("Person")
            .field("name", TextType::new())
            .field("name", TextType::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateField { .. }));
    }

    #[test]
    fn instances_share_the_schema() {
        let schema = person();
        let mut a = Arc::clone(&schema).instantiate();
        let mut b = schema.instantiate();
        a.set("age", 30).unwrap();
        b.set("age", 40).unwrap();
        assert_eq!(a.get("age").unwrap(), &Value::Int(30));
        assert_eq!(b.get("age").unwrap(), &Value::Int(40));
    }

    #[test]
    fn unknown_field_is_a_configuration_error() {
        let schema = person();
        let mut p = schema.instantiate();
        let err = p.set("height", 180).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::UnknownField { .. })
        ));
        assert!(p.get("height").is_err());
    }

    #[test]
    fn rejected_assignment_keeps_prior_value() {
        let schema = person();
        let mut p = schema.instantiate();
        p.set("age", 30).unwrap();
        assert!(p.set("age", "thirty").is_err());
        assert_eq!(p.get("age").unwrap(), &Value::Int(30));
    }

    #[test]
    fn unset_then_get_is_missing() {
        let schema = person();
        let mut p = schema.instantiate();
        p.set("name", "Ada").unwrap();
        assert!(p.is_set("name"));
        assert_eq!(p.unset("name").unwrap(), Value::from("Ada"));
        assert!(!p.is_set("name"));
        assert!(matches!(p.get("name").unwrap_err(), Error::Missing(_)));
        assert!(matches!(p.unset("name").unwrap_err(), Error::Missing(_)));
    }
}
