//! Common imports for declaring and using validated types.
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let schema = Schema::builder("Widget")
//!     .field("label", TextType::new())
//!     .field("count", IntType::new().and(SemiPositive::new()))
//!     .build()
//!     .unwrap();
//! ```

pub use crate::combinators::{And, Or};
pub use crate::foundation::{
    AttributeMissing, Binding, ConfigurationError, Error, FieldValidator, FieldValidatorExt,
    ResourceError, ValidationError,
};
pub use crate::registry::{RuleEntry, RuleFamily};
pub use crate::schema::{Instance, Schema, SchemaBuilder};
pub use crate::validators::*;
pub use crate::value::{FuncValue, Value, ValueKind};
pub use crate::{any_of, compose};
