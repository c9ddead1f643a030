//! Directory-materializing validator.

use std::fs;
use std::path::Path;

use crate::foundation::{Binding, ConfigurationError, Error, FieldValidator, ResourceError};
use crate::schema::Instance;
use crate::value::Value;

/// Creates the directory named by the assigned text value when it does
/// not exist yet, intermediate directories included.
///
/// A creation attempt that loses the race — the path appears between the
/// existence check and the attempt — is tolerated. Any other creation
/// failure surfaces as [`ResourceError`], which is a fault, not a
/// rejection: a disjunction will not swallow it.
#[derive(Debug, Clone, Default)]
pub struct EnsureDir {
    binding: Binding,
}

impl EnsureDir {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldValidator for EnsureDir {
    fn field_type(&self) -> String {
        "EnsureDir".to_owned()
    }

    fn bound_name(&self) -> Option<&str> {
        self.binding.name()
    }

    fn bind(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.binding.bind(name)
    }

    fn check(&self, instance: &Instance, value: &Value, slot: &str) -> Result<(), Error> {
        let Value::Text(path) = value else {
            return Err(self.reject(instance, value, slot));
        };
        let path = Path::new(path);
        if !path.exists() {
            if let Err(source) = fs::create_dir_all(path) {
                if !path.exists() {
                    return Err(Error::Resource(ResourceError {
                        path: path.display().to_string(),
                        source,
                    }));
                }
            }
        }
        Ok(())
    }
}
