//! Core contract and error types.
//!
//! This module holds the fundamental building blocks of the engine:
//!
//! - **Traits**: [`FieldValidator`], [`FieldValidatorExt`], [`Binding`]
//! - **Errors**: [`Error`], [`ValidationError`], [`ConfigurationError`],
//!   [`AttributeMissing`], [`ResourceError`]
//!
//! The contract is deliberately small: a validator knows its rule name,
//! its bound attribute, a rejection check, and a validate-and-store step.
//! Everything else — composition, mass production, binding — is built on
//! top of those four operations.

pub mod error;
pub mod traits;

pub use error::{AttributeMissing, ConfigurationError, Error, ResourceError, ValidationError};
pub use traits::{Binding, FieldValidator, FieldValidatorExt};
