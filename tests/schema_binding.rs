//! End-to-end tests for type declaration, binding, and attribute access.

use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn declaration_binds_in_order_and_governs_access() {
    let schema = Schema::builder("ExistingFile")
        .field("path", ExistingPath::new())
        .field("name", TextType::new())
        .field("size", IntType::new())
        .build()
        .unwrap();

    let declared: Vec<_> = schema.fields().map(|(n, _)| n).collect();
    assert_eq!(declared, vec!["path", "name", "size"]);
    for (name, validator) in schema.fields() {
        assert_eq!(validator.bound_name(), Some(name));
    }

    let mut file = schema.instantiate();
    let cwd = std::env::current_dir().unwrap();
    file.set("path", cwd.to_string_lossy().as_ref()).unwrap();
    file.set("name", "data.bin").unwrap();
    file.set("size", 1024).unwrap();
    assert_eq!(file.get("size").unwrap(), &Value::Int(1024));
}

#[test]
fn reads_are_idempotent_and_round_trip() {
    let schema = Schema::builder("A")
        .field("f", ListType::new())
        .build()
        .unwrap();
    let mut a = schema.instantiate();
    let v = Value::List(vec![Value::Int(1), Value::from("two")]);
    a.set("f", v.clone()).unwrap();
    assert_eq!(a.get("f").unwrap(), &v);
    assert_eq!(a.get("f").unwrap(), a.get("f").unwrap());
}

#[test]
fn get_before_any_store_is_missing() {
    let schema = Schema::builder("A")
        .field("f", TextType::new())
        .build()
        .unwrap();
    let a = schema.instantiate();
    assert!(matches!(a.get("f").unwrap_err(), Error::Missing(_)));
}

#[test]
fn delete_removes_the_stored_value() {
    let schema = Schema::builder("A")
        .field("f", TextType::new())
        .build()
        .unwrap();
    let mut a = schema.instantiate();
    a.set("f", "test").unwrap();
    assert!(a.is_set("f"));
    a.unset("f").unwrap();
    assert!(!a.is_set("f"));
    assert!(matches!(a.unset("f").unwrap_err(), Error::Missing(_)));
}

#[test]
fn rejected_assignment_preserves_the_prior_value() {
    let schema = Schema::builder("A")
        .field("f", IntType::new())
        .build()
        .unwrap();
    let mut a = schema.instantiate();
    a.set("f", 1).unwrap();
    let err = a.set("f", "nope").unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(a.get("f").unwrap(), &Value::Int(1));
}

#[test]
fn diagnostics_name_rule_owner_attribute_and_value() {
    let schema = Schema::builder("Account")
        .field("balance", GreaterThan::new(7.0))
        .build()
        .unwrap();
    let mut account = schema.instantiate();
    let err = account.set("balance", 6).unwrap_err();
    let Error::Validation(v) = err else {
        panic!("expected a rejection");
    };
    assert_eq!(v.rule, "GreaterThan(7)");
    assert_eq!(v.attribute.as_deref(), Some("balance"));
    assert!(v.message.contains("GreaterThan(7)"));
    assert!(v.message.contains("Account.balance"));
    assert!(v.message.contains("int value 6"));
}

#[test]
fn rebinding_a_validator_under_another_name_is_rejected() {
    let mut v = IntType::new();
    v.bind("f").unwrap();
    v.bind("f").unwrap();
    assert!(matches!(
        v.bind("g").unwrap_err(),
        ConfigurationError::Rebound { .. }
    ));
}

#[test]
fn instances_do_not_share_values() {
    let schema = Schema::builder("Counter")
        .field("n", IntType::new())
        .build()
        .unwrap();
    let mut a = std::sync::Arc::clone(&schema).instantiate();
    let mut b = schema.instantiate();
    a.set("n", 1).unwrap();
    b.set("n", 2).unwrap();
    assert_eq!(a.get("n").unwrap(), &Value::Int(1));
    assert_eq!(b.get("n").unwrap(), &Value::Int(2));
}

#[test]
fn json_payloads_flow_through_validators() {
    let schema = Schema::builder("Payload")
        .field("meta", MapType::new().and(HasAttr::new("version")))
        .field("items", ListType::new().and(MinLength::new(1)))
        .build()
        .unwrap();
    let mut p = schema.instantiate();
    p.set("meta", Value::from(json!({"version": 2}))).unwrap();
    p.set("items", Value::from(json!([1, 2, 3]))).unwrap();
    assert!(p.set("meta", Value::from(json!({"other": 1}))).is_err());
    assert!(p.set("items", Value::from(json!([]))).is_err());
}

#[test]
fn mutually_exclusive_pair_end_to_end() {
    let schema = Schema::builder("A")
        .field("f", MutuallyExclusive::new("g"))
        .field("g", MutuallyExclusive::new("f"))
        .build()
        .unwrap();
    let mut a = schema.instantiate();

    // inactive until both sides hold a non-None value
    a.set("f", Value::None).unwrap();
    a.set("g", Value::None).unwrap();

    a.set("g", true).unwrap();
    assert!(a.get("g").unwrap().is_truthy());
    assert!(a.set("f", true).is_err());

    a.set("f", Value::None).unwrap();
    a.set("g", Value::None).unwrap();
    a.set("f", "s").unwrap();
    assert_eq!(a.get("f").unwrap(), &Value::from("s"));
    assert!(a.set("g", 9).is_err());
}

#[test]
fn registry_covers_every_family() {
    use fieldguard::registry::{self, RuleFamily};

    assert!(registry::all_rules().len() >= 30);
    for family in [
        RuleFamily::BuiltinType,
        RuleFamily::NumericRange,
        RuleFamily::Miscellaneous,
        RuleFamily::Handcrafted,
    ] {
        assert!(registry::rules_in(family).count() > 0);
    }
    assert_eq!(
        registry::find("InRange").unwrap().family,
        RuleFamily::NumericRange
    );
}
