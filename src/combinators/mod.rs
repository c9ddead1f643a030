//! Validator composition.
//!
//! Two combinators, both valid [`FieldValidator`]s themselves and so
//! arbitrarily nestable:
//!
//! - [`And`] — conjunction; the left operand's (possibly transformed)
//!   output feeds the right operand
//! - [`Or`] — disjunction; short-circuits on the first accepting operand
//!
//! Built fluently via
//! [`FieldValidatorExt`](crate::foundation::FieldValidatorExt), or in
//! bulk via [`compose!`](crate::compose) / [`any_of!`](crate::any_of).
//! Binding applies to the root of a composed tree; operands stay unbound
//! and receive the root's name at validate time.
//!
//! [`FieldValidator`]: crate::foundation::FieldValidator

pub mod and;
pub mod or;

pub use and::And;
pub use or::Or;
