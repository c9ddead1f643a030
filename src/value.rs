//! Runtime value model for validated attributes.
//!
//! Validators govern attributes of dynamically typed objects, so values are
//! carried as a [`Value`] enum rather than as generic Rust types. Every
//! validator receives a `Value`, and the instance slot map stores `Value`s.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

/// A dynamically typed attribute value.
///
/// # Examples
///
/// ```
/// use fieldguard::value::{Value, ValueKind};
///
/// let v = Value::from("hello");
/// assert_eq!(v.kind(), ValueKind::Text);
/// assert!(v.is_truthy());
/// assert_eq!(v.len(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent/null value.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
    Text(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    /// A text-keyed mapping; preserves insertion order.
    Map(IndexMap<String, Value>),
    /// A callable value.
    Func(FuncValue),
}

/// The kind of a [`Value`], used by type-check validators and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Complex,
    Text,
    List,
    Tuple,
    Set,
    FrozenSet,
    Map,
    Func,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::None => "none",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Complex => "complex",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Tuple => "tuple",
            ValueKind::Set => "set",
            ValueKind::FrozenSet => "frozen set",
            ValueKind::Map => "map",
            ValueKind::Func => "function",
        };
        f.write_str(name)
    }
}

/// A callable stored as a value.
///
/// Compares by pointer identity: two `FuncValue`s are equal only if they
/// wrap the same allocation.
#[derive(Clone)]
pub struct FuncValue(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl FuncValue {
    pub fn new(func: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    /// Applies the wrapped function.
    #[must_use]
    pub fn call(&self, value: Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

impl PartialEq for FuncValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Complex { .. } => ValueKind::Complex,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Set(_) => ValueKind::Set,
            Value::FrozenSet(_) => ValueKind::FrozenSet,
            Value::Map(_) => ValueKind::Map,
            Value::Func(_) => ValueKind::Func,
        }
    }

    /// Truthiness: `None`, zero numbers, and empty text/collections are
    /// falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(x) => *x != 0.0,
            Value::Complex { re, im } => *re != 0.0 || *im != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) | Value::FrozenSet(items) => {
                !items.is_empty()
            }
            Value::Map(entries) => !entries.is_empty(),
            Value::Func(_) => true,
        }
    }

    /// The value as a real number, if it is one.
    ///
    /// Booleans are deliberately not numeric here.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The length of the value: characters for text, elements for
    /// collections, entries for maps. `None` for kinds without a length.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) | Value::FrozenSet(items) => {
                Some(items.len())
            }
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Whether [`Value::contains`] is meaningful for this kind.
    #[must_use]
    pub fn supports_membership(&self) -> bool {
        matches!(
            self,
            Value::Text(_)
                | Value::List(_)
                | Value::Tuple(_)
                | Value::Set(_)
                | Value::FrozenSet(_)
                | Value::Map(_)
        )
    }

    /// Membership test. Text containers match substrings, maps match keys,
    /// other containers match elements. A probe that cannot apply (a
    /// non-text needle against text or a map) is "not a member", never an
    /// error. Kinds without membership always answer `false`.
    #[must_use]
    pub fn contains(&self, needle: &Value) -> bool {
        match self {
            Value::Text(s) => match needle {
                Value::Text(n) => s.contains(n.as_str()),
                _ => false,
            },
            Value::List(items) | Value::Tuple(items) | Value::Set(items) | Value::FrozenSet(items) => {
                items.contains(needle)
            }
            Value::Map(entries) => match needle {
                Value::Text(k) => entries.contains_key(k.as_str()),
                _ => false,
            },
            _ => false,
        }
    }

    /// Builds a set, dropping duplicate elements.
    #[must_use]
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(dedup(items))
    }

    /// Builds a frozen set, dropping duplicate elements.
    #[must_use]
    pub fn frozen_set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::FrozenSet(dedup(items))
    }

    /// Builds a tuple.
    #[must_use]
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Builds a map from `(key, value)` pairs.
    #[must_use]
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a callable value.
    #[must_use]
    pub fn func(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Value::Func(FuncValue::new(f))
    }
}

fn dedup(items: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Complex { re, im } => {
                if *im < 0.0 {
                    write!(f, "{re}{im}i")
                } else {
                    write!(f, "{re}+{im}i")
                }
            }
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => write_seq(f, "[", items, "]"),
            Value::Tuple(items) => write_seq(f, "(", items, ")"),
            Value::Set(items) | Value::FrozenSet(items) => write_seq(f, "{", items, "}"),
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Func(_) => f.write_str("<fn>"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<FuncValue> for Value {
    fn from(func: FuncValue) -> Self {
        Value::Func(func)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
