//! Property-based tests for range checks, coercion, and round-tripping.

use fieldguard::prelude::*;
use proptest::prelude::*;

fn obj(validator: impl FieldValidator + 'static) -> Instance {
    Schema::builder("A")
        .field("f", validator)
        .build()
        .unwrap()
        .instantiate()
}

fn storable_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1e9f64..1e9).prop_map(Value::Float),
        ".{0,16}".prop_map(Value::from),
        proptest::collection::vec(any::<i64>().prop_map(Value::Int), 0..4).prop_map(Value::List),
    ]
}

proptest! {
    #[test]
    fn greater_than_agrees_with_comparison(x in -1_000_000i64..1_000_000, t in -1000i64..1000) {
        let mut a = obj(GreaterThan::new(t as f64));
        prop_assert_eq!(a.set("f", x).is_ok(), x > t);
    }

    #[test]
    fn in_range_is_inclusive(x in -2000i64..2000, lo in -1000i64..0, hi in 0i64..1000) {
        let mut a = obj(InRange::new(lo as f64, hi as f64));
        prop_assert_eq!(a.set("f", x).is_ok(), lo <= x && x <= hi);
    }

    #[test]
    fn integral_text_coerces_to_the_same_integer(i in any::<i64>()) {
        let mut a = obj(NumericCoerce::new());
        a.set("f", i.to_string()).unwrap();
        prop_assert_eq!(a.get("f").unwrap(), &Value::Int(i));
    }

    #[test]
    fn numeric_text_round_trips_through_coercion(x in -1e6f64..1e6) {
        let mut a = obj(NumericCoerce::new());
        a.set("f", x.to_string()).unwrap();
        // integral-valued floats come back as integers; the numeric value
        // is preserved either way
        prop_assert_eq!(a.get("f").unwrap().as_number(), Some(x));
    }

    #[test]
    fn is_convertible_agrees_with_text_to_number(s in ".{0,12}") {
        prop_assert_eq!(
            NumericCoerce::is_convertible(&s),
            NumericCoerce::text_to_number(&s).is_some()
        );
    }

    #[test]
    fn non_transforming_store_round_trips(v in storable_value()) {
        let mut a = obj(NotNone::new().or(Satisfies::new(|_: &Value| true)));
        a.set("f", v.clone()).unwrap();
        prop_assert_eq!(a.get("f").unwrap(), &v);
        // reads are idempotent
        prop_assert_eq!(a.get("f").unwrap(), a.get("f").unwrap());
    }

    #[test]
    fn type_checks_partition_the_kinds(v in storable_value()) {
        let mut ints = obj(IntType::new());
        let mut texts = obj(TextType::new());
        prop_assert_eq!(ints.set("f", v.clone()).is_ok(), v.kind() == ValueKind::Int);
        prop_assert_eq!(texts.set("f", v.clone()).is_ok(), v.kind() == ValueKind::Text);
    }

    #[test]
    fn rejected_assignments_never_clobber_state(good in -1000i64..0, bad in 1i64..1000) {
        let mut a = obj(SemiNegative::new());
        a.set("f", good).unwrap();
        prop_assert!(a.set("f", bad).is_err());
        prop_assert_eq!(a.get("f").unwrap(), &Value::Int(good));
    }
}
