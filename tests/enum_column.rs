//! End-to-end behaviour of enum columns on an in-memory schema.

use lifeguard_enum::{
    ConflictKind, EnumDefinition, EnumError, EnumSpec, ModelType, Record, Row, StaticSchema,
};
use pretty_assertions::assert_eq;
use sea_query::Value;
use serde_json::json;
use std::sync::Arc;

fn schema() -> Arc<StaticSchema> {
    Arc::new(
        StaticSchema::new()
            .table("items", ["id", "name", "condition", "edition", "state"])
            .table("conflicts", ["id", "status"]),
    )
}

fn item() -> ModelType {
    let mut item = ModelType::with_table("Item", "items", schema()).unwrap();
    item.register_enum("condition", ["mint", "very_good", "good", "poor"])
        .unwrap();
    item.register_enum(
        "edition",
        [("first", 0_i64), ("second", 1), ("rare", 2), ("other", 3)],
    )
    .unwrap();
    item
}

fn symbol(name: &str) -> Value {
    Value::String(Some(name.to_string()))
}

fn definition(spec: EnumSpec) -> EnumDefinition {
    EnumDefinition::from_spec(spec).unwrap()
}

#[test]
fn test_class_provides_reflection() {
    let item = item();
    let enums = item.enums();

    assert_eq!(enums.keys().collect::<Vec<_>>(), vec!["condition", "edition"]);
    assert_eq!(
        *enums["condition"],
        definition(EnumSpec::mapping([
            ("mint", 0),
            ("very_good", 1),
            ("good", 2),
            ("poor", 3),
        ]))
    );
    assert_eq!(
        *enums["edition"],
        definition(EnumSpec::mapping([
            ("first", 0),
            ("other", 3),
            ("rare", 2),
            ("second", 1),
        ]))
    );
}

#[test]
fn test_class_accessor_returns_mapping_verbatim() {
    let item = item();

    let editions = item.class_mapping("editions").unwrap();
    assert_eq!(
        editions.to_pairs(),
        vec![
            ("first".to_string(), 0),
            ("second".to_string(), 1),
            ("rare".to_string(), 2),
            ("other".to_string(), 3),
        ]
    );
    assert_eq!(item.class_mapping("conditions").map(EnumDefinition::len), Some(4));
    assert!(item.class_mapping("states").is_none());
}

#[test]
fn test_inheriting_from_abstract_model_provides_reflection() {
    let base = Arc::new(ModelType::abstract_model("AbstractModel", schema()));
    let mut real = base.subclass("RealModel").unwrap();
    real.register_enum("condition", ["mint", "very_good", "fair"])
        .unwrap();

    let enums = real.enums();
    assert_eq!(enums.len(), 1);
    assert_eq!(
        *enums["condition"],
        definition(EnumSpec::mapping([("mint", 0), ("very_good", 1), ("fair", 2)]))
    );
    assert!(base.enums().is_empty());
}

#[test]
fn test_subclass_sees_parent_enums() {
    let mut parent = ModelType::with_table("Item", "items", schema()).unwrap();
    parent
        .register_enum("condition", ["mint", "poor"])
        .unwrap();
    let parent = Arc::new(parent);

    let mut child = parent.subclass("SpecialItem").unwrap();
    assert_eq!(child.table(), Some("items"));
    child.register_enum("edition", ["first", "second"]).unwrap();

    let enums = child.enums();
    assert_eq!(enums.keys().collect::<Vec<_>>(), vec!["condition", "edition"]);

    let mut row = Row::new();
    child.send(&mut row, "condition=", &[symbol("poor")]).unwrap();
    assert_eq!(child.send(&mut row, "condition", &[]).unwrap(), symbol("poor"));
    assert_eq!(child.send(&mut row, "poor?", &[]).unwrap(), Value::Bool(Some(true)));

    // The inherited class accessor makes a redefinition a conflict
    let err = child.register_enum("condition", ["new"]).unwrap_err();
    assert!(matches!(
        err,
        EnumError::Conflict { kind: ConflictKind::Class, ref method, .. } if method == "conditions"
    ));
}

#[test]
fn test_conflicting_definition_is_rejected() {
    let mut conflict = ModelType::with_table("Conflict", "conflicts", schema()).unwrap();
    conflict
        .register_enum("status", ["open", "waiting", "finished"])
        .unwrap();

    let err = conflict
        .register_enum("status", ["new", "pending", "closed"])
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("You tried to define an enum named \"status\" on the model \"Conflict\""));
    assert!(err.to_string().contains("class method \"statuses\""));

    // Nothing from the rejected declaration was installed
    assert!(!conflict.has_instance_method("pending?"));
    assert_eq!(
        conflict.enums()["status"].keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["open", "waiting", "finished"]
    );
}

#[test]
fn test_rejects_spec_that_is_not_a_list_or_map() {
    let mut item = item();
    let err = item.register_enum("state", json!("whatever")).unwrap_err();
    assert!(matches!(err, EnumError::InvalidArgument(_)));
    assert!(!item.has_class_method("states"));
}

#[test]
fn test_rejects_non_integer_mapping_values() {
    let mut item = item();
    let err = item
        .register_enum("state", json!({ "on": 1, "off": "0" }))
        .unwrap_err();
    assert!(matches!(err, EnumError::InvalidArgument(_)));
}

#[test]
fn test_rejects_non_identifier_keys() {
    let mut item = item();
    let err = item
        .register_enum("state", json!({ "turned on": 1 }))
        .unwrap_err();
    assert!(matches!(err, EnumError::InvalidArgument(_)));
}

#[test]
fn test_json_specs_are_accepted() {
    let mut item = ModelType::with_table("Item", "items", schema()).unwrap();
    let state = item
        .register_enum("state", json!({ "draft": 5, "live": 10 }))
        .unwrap();
    assert_eq!(state.definition().code("live"), Some(10));
    assert_eq!(state.mapping_name(), "states");
}

#[test]
fn test_mass_assignment_handles_multiple_enums() {
    let item = item();
    let row = item
        .new_record([("condition", "mint"), ("edition", "first")])
        .unwrap();

    assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(0))));
    assert_eq!(row.attribute("edition"), Some(Value::BigInt(Some(0))));
}

#[test]
fn test_update_accepts_strings_and_changes_one_enum() {
    let item = item();
    let mut row = item
        .new_record([("condition", "mint".to_string()), ("edition", "first".to_string())])
        .unwrap();

    item.assign(&mut row, [("edition", "second")]).unwrap();
    assert_eq!(row.attribute("edition"), Some(Value::BigInt(Some(1))));
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(0))));
}

#[test]
fn test_mass_assignment_mixes_plain_columns() {
    let item = item();
    let row = item
        .new_record([("name", symbol("lamp")), ("condition", symbol("good"))])
        .unwrap();
    assert_eq!(row.attribute("name"), Some(symbol("lamp")));
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(2))));
}

#[test]
fn test_setter_with_valid_value_stores_index() {
    let item = item();
    let mut row = Row::new();
    item.send(&mut row, "condition=", &[symbol("mint")]).unwrap();
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(0))));
    assert_eq!(item.send(&mut row, "condition", &[]).unwrap(), symbol("mint"));
}

#[test]
fn test_setter_with_invalid_value_stores_null() {
    let item = item();
    let mut row = Row::new();
    item.send(&mut row, "condition=", &[symbol("fair")]).unwrap();
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(None)));
    assert_eq!(item.send(&mut row, "condition", &[]).unwrap(), Value::String(None));
}

#[test]
fn test_setter_with_non_symbolic_value_stores_null() {
    let item = item();
    let mut row = Row::new();
    item.send(&mut row, "condition=", &[Value::Int(Some(1))]).unwrap();
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(None)));
    item.send(&mut row, "condition=", &[]).unwrap();
    assert_eq!(row.attribute("condition"), Some(Value::BigInt(None)));
}

#[test]
fn test_getter_with_valid_index_returns_value() {
    let item = item();
    let mut row = Row::new();
    row.set_attribute("condition", Value::Int(Some(1)));
    assert_eq!(item.send(&mut row, "condition", &[]).unwrap(), symbol("very_good"));
}

#[test]
fn test_getter_with_invalid_index_returns_null() {
    let item = item();
    let mut row = Row::new();
    row.set_attribute("condition", Value::Int(Some(10)));
    assert_eq!(item.send(&mut row, "condition", &[]).unwrap(), Value::String(None));

    let empty = Row::new();
    assert_eq!(item.send_get(&empty, "condition").unwrap(), Value::String(None));
}

#[test]
fn test_predicate_true_when_value_matches() {
    let item = item();
    let mut row = Row::new();
    item.send(&mut row, "condition=", &[symbol("good")]).unwrap();
    assert_eq!(item.send(&mut row, "good?", &[]).unwrap(), Value::Bool(Some(true)));
}

#[test]
fn test_predicate_false_when_value_differs() {
    let item = item();
    let mut row = Row::new();
    item.send(&mut row, "condition=", &[symbol("mint")]).unwrap();
    assert_eq!(item.send(&mut row, "poor?", &[]).unwrap(), Value::Bool(Some(false)));
}

#[test]
fn test_every_predicate_tracks_getter() {
    let item = item();
    let names = ["mint", "very_good", "good", "poor"];

    for current in names {
        let mut row = item.new_record([("condition", current)]).unwrap();
        for name in names {
            let predicate = format!("{name}?");
            assert_eq!(
                item.send(&mut row, &predicate, &[]).unwrap(),
                Value::Bool(Some(name == current)),
                "{predicate} after setting {current}"
            );
        }
    }
}

#[test]
fn test_typed_accessor_matches_dynamic_dispatch() {
    let mut item = ModelType::with_table("Item", "items", schema()).unwrap();
    let condition = item
        .register_enum("condition", ["mint", "very_good", "good", "poor"])
        .unwrap();

    let mut row = Row::new();
    assert_eq!(condition.set(&mut row, "poor"), Some(3));
    assert_eq!(item.send(&mut row, "condition", &[]).unwrap(), symbol("poor"));
    assert!(condition.is(&row, "poor"));

    item.send(&mut row, "condition=", &[symbol("very_good")]).unwrap();
    assert_eq!(condition.get(&row).map(|k| k.as_str()), Some("very_good"));
}
