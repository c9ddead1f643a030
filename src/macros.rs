//! Macros for mass-producing validators.
//!
//! # Available Macros
//!
//! - [`field_validator!`] — builds a complete validator (struct, `new`,
//!   `FieldValidator` impl) from a rule name, a parameter list, and a
//!   predicate body
//! - [`compose!`] — AND-chains multiple validators
//! - [`any_of!`] — OR-chains multiple validators
//!
//! # Examples
//!
//! ```rust,ignore
//! // Unit rule (no parameters)
//! field_validator! {
//!     pub Positive;
//!     rule(value) { value.as_number().is_some_and(|n| n > 0.0) }
//! }
//!
//! // Parameterized rule
//! field_validator! {
//!     pub GreaterThan { threshold: f64 };
//!     rule(self, value) { value.as_number().is_some_and(|n| n > self.threshold) }
//! }
//! ```

// ============================================================================
// FIELD VALIDATOR MACRO
// ============================================================================

/// Builds a complete predicate validator.
///
/// The generated struct embeds a [`Binding`](crate::foundation::Binding)
/// and implements [`FieldValidator`](crate::foundation::FieldValidator)
/// with the given predicate as its `check`. A false predicate rejects via
/// the protocol's `reject`, so the diagnostic carries the rule name, the
/// owning type, the attribute, and the offending value.
///
/// Parameterized rules embed their parameter values into `field_type()`
/// in declaration order: `GreaterThan { threshold: 7.0 }` renders as
/// `"GreaterThan(7)"`.
///
/// # Variants
///
/// **Unit rule** (no parameters):
/// ```rust,ignore
/// field_validator! {
///     pub NotNone;
///     rule(value) { value.kind() != ValueKind::None }
/// }
/// ```
///
/// **Parameterized rule** (auto `new` from the parameter list):
/// ```rust,ignore
/// field_validator! {
///     pub Length { length: usize };
///     rule(self, value) { value.len() == Some(self.length) }
/// }
/// ```
///
/// **Custom constructor** (argument list plus one init expression per
/// parameter, in declaration order):
/// ```rust,ignore
/// field_validator! {
///     pub HasAttr { key: String };
///     rule(self, value) { ... }
///     new(key: impl Into<String>) => (key.into())
/// }
/// ```
#[macro_export]
macro_rules! field_validator {
    // ── Unit rule (no parameters) ────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($val:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            binding: $crate::foundation::Binding,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::foundation::FieldValidator for $name {
            fn field_type(&self) -> String {
                stringify!($name).to_owned()
            }

            fn bound_name(&self) -> Option<&str> {
                self.binding.name()
            }

            fn bind(&mut self, name: &str) -> Result<(), $crate::foundation::ConfigurationError> {
                self.binding.bind(name)
            }

            fn check(
                &self,
                instance: &$crate::schema::Instance,
                $val: &$crate::value::Value,
                slot: &str,
            ) -> Result<(), $crate::foundation::Error> {
                if $rule {
                    Ok(())
                } else {
                    Err(self.reject(instance, $val, slot))
                }
            }
        }
    };

    // ── Parameterized rule, auto `new` ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $val:ident) $rule:block
    ) => {
        $crate::field_validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $val) $rule
            new($($field: $fty),+) => ($($field),+)
        }
    };

    // ── Parameterized rule, custom constructor ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $val:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) => ($($init:expr),+ $(,)?)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            binding: $crate::foundation::Binding,
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self {
                Self {
                    $($field: $init,)+
                    binding: ::std::default::Default::default(),
                }
            }
        }

        impl $crate::foundation::FieldValidator for $name {
            fn field_type(&self) -> String {
                let params = [$(self.$field.to_string()),+];
                ::std::format!("{}({})", stringify!($name), params.join(", "))
            }

            fn bound_name(&self) -> Option<&str> {
                self.binding.name()
            }

            fn bind(&mut self, name: &str) -> Result<(), $crate::foundation::ConfigurationError> {
                self.binding.bind(name)
            }

            fn check(
                &$self_,
                instance: &$crate::schema::Instance,
                $val: &$crate::value::Value,
                slot: &str,
            ) -> Result<(), $crate::foundation::Error> {
                if $rule {
                    Ok(())
                } else {
                    Err($self_.reject(instance, $val, slot))
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE / ANY_OF
// ============================================================================

/// AND-chains multiple validators.
///
/// ```rust,ignore
/// let rule = compose![TextType::new(), MinLength::new(3), MaxLength::new(20)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        use $crate::foundation::FieldValidatorExt as _;
        $first$(.and($rest))+
    }};
}

/// OR-chains multiple validators.
///
/// ```rust,ignore
/// let rule = any_of![TupleType::new(), ListType::new(), SetType::new()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        use $crate::foundation::FieldValidatorExt as _;
        $first$(.or($rest))+
    }};
}

// ============================================================================
// TESTS
// ============================================================================
