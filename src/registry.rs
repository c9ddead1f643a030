//! Rule registry.
//!
//! A stable enumeration of every shipped validator, partitioned by
//! family, with the descriptive text the external documentation
//! generator consumes. The entries carry no runtime behavior; the
//! validators themselves live in [`crate::validators`].

use serde::Serialize;

/// The family a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleFamily {
    /// Runtime type/kind tests, one per value kind.
    BuiltinType,
    /// Sign, zero, and threshold rules over numbers.
    NumericRange,
    /// Factory-produced predicates that fit no other family.
    Miscellaneous,
    /// Rules whose behavior needs more than one predicate evaluation.
    Handcrafted,
}

/// One registered rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    /// The rule name as it appears in `field_type()`, without parameters.
    pub name: &'static str,
    pub family: RuleFamily,
    /// One-paragraph description for the reference document.
    pub summary: &'static str,
    /// Optional usage sketch for the reference document.
    pub example: Option<&'static str>,
}

macro_rules! entry {
    ($name:literal, $family:ident, $summary:literal) => {
        RuleEntry {
            name: $name,
            family: RuleFamily::$family,
            summary: $summary,
            example: None,
        }
    };
    ($name:literal, $family:ident, $summary:literal, $example:literal) => {
        RuleEntry {
            name: $name,
            family: RuleFamily::$family,
            summary: $summary,
            example: Some($example),
        }
    };
}

static RULES: &[RuleEntry] = &[
    // Built-in type checks
    entry!("BoolType", BuiltinType, "Allows only boolean values."),
    entry!("IntType", BuiltinType, "Allows only integer values."),
    entry!("FloatType", BuiltinType, "Allows only floating-point values."),
    entry!("ComplexType", BuiltinType, "Allows only complex-number values."),
    entry!("TextType", BuiltinType, "Allows only text values."),
    entry!("ListType", BuiltinType, "Allows only list values."),
    entry!("TupleType", BuiltinType, "Allows only tuple values."),
    entry!("SetType", BuiltinType, "Allows only set values."),
    entry!("FrozenSetType", BuiltinType, "Allows only frozen-set values."),
    entry!("MapType", BuiltinType, "Allows only map values."),
    // Numeric ranges
    entry!("Positive", NumericRange, "Allows only values > 0."),
    entry!("SemiPositive", NumericRange, "Allows only values >= 0."),
    entry!("Negative", NumericRange, "Allows only values < 0."),
    entry!("SemiNegative", NumericRange, "Allows only values <= 0."),
    entry!("NotZero", NumericRange, "Allows only non-zero values."),
    entry!(
        "GreaterThan",
        NumericRange,
        "Allows only values strictly greater than the threshold.",
        "field(\"f\", GreaterThan::new(3.0)) — 7 passes, 2 is rejected"
    ),
    entry!(
        "GreaterThanOrEqual",
        NumericRange,
        "Allows only values greater than or equal to the threshold.",
        "field(\"f\", GreaterThanOrEqual::new(3.0)) — 3 passes, 2 is rejected"
    ),
    entry!(
        "LessThan",
        NumericRange,
        "Allows only values strictly less than the threshold.",
        "field(\"f\", LessThan::new(3.0)) — 2 passes, 7 is rejected"
    ),
    entry!(
        "LessThanOrEqual",
        NumericRange,
        "Allows only values less than or equal to the threshold.",
        "field(\"f\", LessThanOrEqual::new(3.0)) — 3 passes, 6 is rejected"
    ),
    entry!(
        "InRange",
        NumericRange,
        "Allows only values within the inclusive range.",
        "field(\"f\", InRange::new(3.0, 8.0)) — 6 passes, 0 is rejected"
    ),
    // Miscellaneous predicates
    entry!("NotNone", Miscellaneous, "Rejects the absent value."),
    entry!(
        "Callable",
        Miscellaneous,
        "Allows only callable values.",
        "field(\"hook\", Callable::new()) — Value::func(...) passes, text is rejected"
    ),
    entry!(
        "HasAttr",
        Miscellaneous,
        "Allows only map values carrying the given key.",
        "field(\"f\", HasAttr::new(\"read\")) — a map with a \"read\" entry passes"
    ),
    entry!(
        "Satisfies",
        Miscellaneous,
        "Allows only values the supplied predicate accepts.",
        "field(\"even\", Satisfies::new(|v| matches!(v, Value::Int(i) if i % 2 == 0)))"
    ),
    entry!(
        "NotSatisfies",
        Miscellaneous,
        "Allows only values the supplied predicate rejects."
    ),
    entry!("Length", Miscellaneous, "Allows only values of exactly the given length."),
    entry!("MinLength", Miscellaneous, "Allows only values of at least the given length."),
    entry!("MaxLength", Miscellaneous, "Allows only values of at most the given length."),
    entry!(
        "ExistingPath",
        Miscellaneous,
        "Allows only text naming an existing filesystem path."
    ),
    // Handcrafted
    entry!(
        "Membership",
        Handcrafted,
        "Allows only members of the configured container; construction \
         fails for container kinds without a membership test.",
        "field(\"mood\", Membership::new(Value::set([...]))?)"
    ),
    entry!(
        "RegexMatch",
        Handcrafted,
        "Allows only text the pattern matches somewhere (search, not \
         full-match)."
    ),
    entry!(
        "NotRegexMatch",
        Handcrafted,
        "Allows only text the pattern matches nowhere."
    ),
    entry!(
        "Transform",
        Handcrafted,
        "Stores the result of applying the supplied function to the \
         assigned value.",
        "field(\"f\", Transform::new(|v| lowercase(v))) — \"AbC\" stores as \"abc\""
    ),
    entry!(
        "NumericCoerce",
        Handcrafted,
        "Passes numbers through, parses numeric text (integral first, \
         floating-point fallback), rejects booleans and everything else.",
        "field(\"f\", NumericCoerce::new()) — \"7\" stores as Int(7), \"7.0\" as Float(7.0)"
    ),
    entry!(
        "EnsureDir",
        Handcrafted,
        "Creates the directory named by the assigned text when missing, \
         intermediate directories included."
    ),
    entry!(
        "MutuallyExclusive",
        Handcrafted,
        "Requires exactly one of this attribute and its peer to be \
         truthy; inactive until both hold a non-None value.",
        "field(\"f1\", MutuallyExclusive::new(\"f2\")).field(\"f2\", MutuallyExclusive::new(\"f1\"))"
    ),
];

/// Every registered rule, in a stable order: built-in types, numeric
/// ranges, miscellaneous, handcrafted.
#[must_use]
pub fn all_rules() -> &'static [RuleEntry] {
    RULES
}

/// The rules of one family, in registry order.
pub fn rules_in(family: RuleFamily) -> impl Iterator<Item = &'static RuleEntry> {
    RULES.iter().filter(move |r| r.family == family)
}

/// Looks a rule up by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static RuleEntry> {
    RULES.iter().find(|r| r.name == name)
}
