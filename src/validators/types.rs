//! Built-in type checks, one per value kind.

use crate::value::ValueKind;

crate::field_validator! {
    /// Allows only boolean values.
    pub BoolType;
    rule(value) { value.kind() == ValueKind::Bool }
}

crate::field_validator! {
    /// Allows only integer values.
    pub IntType;
    rule(value) { value.kind() == ValueKind::Int }
}

crate::field_validator! {
    /// Allows only floating-point values.
    pub FloatType;
    rule(value) { value.kind() == ValueKind::Float }
}

crate::field_validator! {
    /// Allows only complex-number values.
    pub ComplexType;
    rule(value) { value.kind() == ValueKind::Complex }
}

crate::field_validator! {
    /// Allows only text values.
    pub TextType;
    rule(value) { value.kind() == ValueKind::Text }
}

crate::field_validator! {
    /// Allows only list values.
    pub ListType;
    rule(value) { value.kind() == ValueKind::List }
}

crate::field_validator! {
    /// Allows only tuple values.
    pub TupleType;
    rule(value) { value.kind() == ValueKind::Tuple }
}

crate::field_validator! {
    /// Allows only set values.
    pub SetType;
    rule(value) { value.kind() == ValueKind::Set }
}

crate::field_validator! {
    /// Allows only frozen-set values.
    pub FrozenSetType;
    rule(value) { value.kind() == ValueKind::FrozenSet }
}

crate::field_validator! {
    /// Allows only map values.
    pub MapType;
    rule(value) { value.kind() == ValueKind::Map }
}

// ============================================================================
// TESTS
// ============================================================================
