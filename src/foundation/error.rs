//! Error types for the validation engine.
//!
//! Four kinds, all surfaced through one [`Error`] enum:
//!
//! - [`ValidationError`] — a validator rejected a value. This is the only
//!   kind the composition engine treats as "the validator said no";
//!   everything else is an unrelated fault and propagates unmodified
//!   through combinators.
//! - [`ConfigurationError`] — a validator or schema was built wrong.
//! - [`AttributeMissing`] — retrieve/remove on a slot that holds nothing.
//! - [`ResourceError`] — a side-effecting validator failed against the
//!   filesystem.

use std::io;

use crate::value::ValueKind;

/// Any failure the validation engine can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Missing(#[from] AttributeMissing),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl Error {
    /// True when this is a validator rejection rather than an unrelated
    /// fault. Disjunctions branch on exactly this.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The rejection payload, when this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// A value was rejected by a validator.
///
/// `message` is the fully rendered diagnostic naming the rule, the owning
/// type, the attribute, and the rejected value. `rule` is the rejecting
/// validator's `field_type()`, which for composed validators attributes the
/// rejection to the composition root.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub rule: String,
    pub attribute: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        rule: impl Into<String>,
        attribute: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            attribute,
            message: message.into(),
        }
    }
}

/// A validator or schema was constructed incorrectly.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The membership container cannot answer membership queries.
    #[error("`{kind}` values do not support membership testing")]
    NoMembership { kind: ValueKind },

    /// A regex validator was given a malformed pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A validator instance was bound to a second attribute name.
    #[error("validator is already bound to `{existing}`, cannot rebind to `{requested}`")]
    Rebound { existing: String, requested: String },

    /// An unbound validator was asked to mediate attribute access.
    #[error("validator `{field_type}` is not bound to an attribute")]
    Unbound { field_type: String },

    /// Two schema fields were declared under the same name.
    #[error("duplicate field `{name}` in `{type_name}` declaration")]
    DuplicateField { type_name: String, name: String },

    /// An attribute access named a field the schema never declared.
    #[error("`{type_name}` has no field named `{name}`")]
    UnknownField { type_name: String, name: String },
}

/// Retrieve/remove found no stored value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("`{type_name}.{attribute}` has no stored value")]
pub struct AttributeMissing {
    pub type_name: String,
    pub attribute: String,
}

/// A side-effecting validator failed against the filesystem.
#[derive(Debug, thiserror::Error)]
#[error("could not create directory `{path}`: {source}")]
pub struct ResourceError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_distinguished_from_faults() {
        let rejection = Error::from(ValidationError::new("Positive", None, "no"));
        assert!(rejection.is_rejection());
        assert!(rejection.as_validation().is_some());

        let fault = Error::from(ResourceError {
            path: "/tmp/x".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(!fault.is_rejection());
        assert!(fault.as_validation().is_none());
    }

    #[test]
    fn display_carries_the_rendered_message() {
        let err = ValidationError::new("Positive", Some("f".into()), "value -1 rejected");
        assert_eq!(err.to_string(), "value -1 rejected");
    }

    #[test]
    fn missing_names_type_and_attribute() {
        let err = AttributeMissing {
            type_name: "A".into(),
            attribute: "f".into(),
        };
        assert_eq!(err.to_string(), "`A.f` has no stored value");
    }
}
