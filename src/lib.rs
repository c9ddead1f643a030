//! # fieldguard
//!
//! Composable field validators for dynamically typed structured objects.
//!
//! A [`FieldValidator`](foundation::FieldValidator) governs how one named
//! attribute may be assigned: it rejects disallowed values, may transform
//! accepted values before storage, and combines with other validators
//! through `.and()` / `.or()` into arbitrarily deep rule trees. A
//! [`Schema`](schema::Schema) binds validators to attribute names at
//! type-declaration time; every assignment to an instance then routes
//! through the bound validator.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let schema = Schema::builder("Account")
//!     .field("name", TextType::new().and(MinLength::new(1)))
//!     .field("balance", NumericCoerce::new())
//!     .build()
//!     .unwrap();
//!
//! let mut account = schema.instantiate();
//! account.set("name", "alice").unwrap();
//! account.set("balance", "7").unwrap();
//! assert_eq!(account.get("balance").unwrap(), &Value::Int(7));
//! assert!(account.set("name", 42).is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`field_validator!`] macro for zero-boilerplate predicate
//! rules, or implement [`FieldValidator`](foundation::FieldValidator)
//! manually when the rule needs to manage storage itself.
//!
//! ## Built-in Validators
//!
//! - **Type checks**: [`BoolType`](validators::BoolType) …
//!   [`MapType`](validators::MapType), one per value kind
//! - **Numeric ranges**: [`Positive`](validators::Positive),
//!   [`GreaterThan`](validators::GreaterThan),
//!   [`InRange`](validators::InRange), …
//! - **Miscellaneous**: [`NotNone`](validators::NotNone),
//!   [`Satisfies`](validators::Satisfies),
//!   [`MinLength`](validators::MinLength), …
//! - **Handcrafted**: [`Membership`](validators::Membership),
//!   [`Transform`](validators::Transform),
//!   [`NumericCoerce`](validators::NumericCoerce),
//!   [`MutuallyExclusive`](validators::MutuallyExclusive), …

// Error (with its rendered diagnostic) is the return currency of every
// validate-and-store call; boxing it would add indirection for no
// practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod validators;
pub mod value;
