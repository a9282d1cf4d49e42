//! Property-based tests for the null field.
//!
//! Whatever the wrapped attribute store holds, a null field must:
//! - read `id` as `0` and `name` as `""`
//! - answer every other key exactly as the base accessor would
//! - give the same answer on every read

use proptest::prelude::*;
use serde_json::{Value, json};
use wire_model::{Field, FieldAccess, NullField};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("id".to_string()),
        Just("name".to_string()),
        Just("label".to_string()),
        Just("flags".to_string()),
        Just("type".to_string()),
        prop::string::string_regex("[a-zA-Z_]{0,12}").unwrap(),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        prop::string::string_regex("[a-z_]{1,10}").unwrap().prop_map(Value::from),
    ]
}

fn field_strategy() -> impl Strategy<Value = Field> {
    (
        any::<u32>(),
        prop::string::string_regex("[a-z_]{0,10}").unwrap(),
        any::<u32>(),
        prop::option::of(prop::string::string_regex("Fieldtype[A-Z][a-z]{1,8}").unwrap()),
        prop::collection::vec((key_strategy(), value_strategy()), 0..8),
    )
        .prop_map(|(id, name, flags, field_type, attrs)| {
            let mut field = Field::new(id, name);
            field.flags = wire_model::FieldFlags::from_bits(flags);
            field.field_type = field_type;
            for (key, value) in attrs {
                // Raw store writes, including keys the typed accessor shadows.
                field.attributes.insert(key, value);
            }
            field
        })
}

// =============================================================================
// NULL FIELD PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn id_is_always_zero(field in field_strategy()) {
        let null = NullField::from(field);
        prop_assert_eq!(null.get("id"), json!(0));
        prop_assert!(!null.exists());
    }

    #[test]
    fn name_is_always_empty(field in field_strategy()) {
        let null = NullField::from(field);
        prop_assert_eq!(null.get("name"), json!(""));
        prop_assert_eq!(FieldAccess::name(&null), String::new());
    }

    #[test]
    fn other_keys_match_base(field in field_strategy(), key in key_strategy()) {
        prop_assume!(key != "id" && key != "name");
        let null = NullField::from(field.clone());
        prop_assert_eq!(null.get(&key), field.get(&key));
        prop_assert_eq!(null.require(&key).ok(), field.require(&key).ok());
        prop_assert_eq!(null.require(&key).is_err(), field.require(&key).is_err());
    }

    #[test]
    fn reads_are_idempotent(field in field_strategy(), key in key_strategy()) {
        let null = NullField::from(field);
        let first = null.get(&key);
        prop_assert_eq!(null.get(&key), first.clone());
        prop_assert_eq!(null.get(&key), first);
    }

    #[test]
    fn reads_do_not_mutate(field in field_strategy(), key in key_strategy()) {
        let null = NullField::from(field);
        let before = null.clone();
        let _ = null.get(&key);
        let _ = null.require(&key);
        prop_assert_eq!(null, before);
    }
}
