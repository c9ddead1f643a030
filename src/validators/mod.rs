//! Built-in validators.
//!
//! # Families
//!
//! - **Type checks** ([`types`]): one validator per value kind
//! - **Numeric ranges** ([`range`]): sign, zero, and threshold rules
//! - **Miscellaneous predicates** ([`misc`]): presence, callability,
//!   length, path existence, user-supplied predicates
//! - **Handcrafted** ([`membership`], [`pattern`], [`transform`],
//!   [`coerce`], [`path`], [`exclusive`]): rules whose behavior needs
//!   more than one predicate evaluation — membership testing, regex
//!   search, value transformation, numeric coercion, directory
//!   materialization, and the mutually-exclusive pair constraint
//!
//! # Examples
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let schema = Schema::builder("Upload")
//!     .field("name", TextType::new().and(MinLength::new(1)))
//!     .field("size", NumericCoerce::new())
//!     .field("tags", TupleType::new().or(ListType::new()))
//!     .build()
//!     .unwrap();
//! ```

pub mod coerce;
pub mod exclusive;
pub mod membership;
pub mod misc;
pub mod path;
pub mod pattern;
pub mod range;
pub mod transform;
pub mod types;

pub use coerce::NumericCoerce;
pub use exclusive::MutuallyExclusive;
pub use membership::Membership;
pub use misc::{
    Callable, ExistingPath, HasAttr, Length, MaxLength, MinLength, NotNone, NotSatisfies,
    Predicate, Satisfies,
};
pub use path::EnsureDir;
pub use pattern::{NotRegexMatch, RegexMatch};
pub use range::{
    GreaterThan, GreaterThanOrEqual, InRange, LessThan, LessThanOrEqual, Negative, NotZero,
    Positive, SemiNegative, SemiPositive,
};
pub use transform::Transform;
pub use types::{
    BoolType, ComplexType, FloatType, FrozenSetType, IntType, ListType, MapType, SetType,
    TextType, TupleType,
};
