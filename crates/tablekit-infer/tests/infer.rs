use serde_json::json;

use tablekit_infer::{InferError, infer_table};
use tablekit_model::FieldKind;

#[test]
fn array_import_extracts_id_keys_and_preserves_records() {
    let sample = json!([
        { "id": 1, "name": "Sword", "atk": 10 },
        { "id": 2, "name": "Shield", "atk": 0 }
    ]);
    let table = infer_table("items", &sample, 5).unwrap();

    assert_eq!(table.index, 5);
    assert_eq!(table.name, "items");
    assert_eq!(table.list_display_field, "id");

    let field_types: Vec<(&str, &str)> = table
        .fields
        .iter()
        .map(|field| (field.key.as_str(), field.type_name()))
        .collect();
    assert_eq!(
        field_types,
        [("id", "number"), ("name", "string"), ("atk", "number")]
    );

    let keys: Vec<&str> = table.items_by_index().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["1", "2"]);
    assert_eq!(
        table.data["1"].info,
        json!({ "id": 1, "name": "Sword", "atk": 10 })
    );
    assert_eq!(
        table.data["2"].info,
        json!({ "id": 2, "name": "Shield", "atk": 0 })
    );
}

#[test]
fn array_import_synthesizes_keys_when_no_id_or_key() {
    let sample = json!([
        { "name": "a" },
        { "name": "b" }
    ]);
    let table = infer_table("t", &sample, 0).unwrap();
    let keys: Vec<&str> = table.items_by_index().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["item_0", "item_1"]);
}

#[test]
fn object_import_keeps_entry_keys() {
    let sample = json!({
        "a": { "v": 1 },
        "b": { "v": 2 }
    });
    let table = infer_table("cfg", &sample, 0).unwrap();

    let keys: Vec<&str> = table.items_by_index().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(table.data["a"].info, json!({ "v": 1 }));
    assert_eq!(table.data["b"].info, json!({ "v": 2 }));
    assert_eq!(table.fields.len(), 1);
    assert_eq!(table.fields[0].key, "v");
    assert_eq!(table.fields[0].type_name(), "number");
}

#[test]
fn object_of_lists_infers_schema_from_first_element() {
    let sample = json!({
        "wave1": [ { "enemy": "slime", "hp": 10 } ],
        "wave2": [ { "enemy": "bat", "hp": 5 }, { "enemy": "orc", "hp": 30 } ]
    });
    let table = infer_table("waves", &sample, 0).unwrap();

    // Schema describes the list element, not the list wrapper.
    let field_keys: Vec<&str> = table
        .fields
        .iter()
        .map(|field| field.key.as_str())
        .collect();
    assert_eq!(field_keys, ["enemy", "hp"]);

    // Payloads keep their list shape.
    assert!(table.is_list_data());
    assert_eq!(table.data["wave2"].info.as_array().unwrap().len(), 2);
}

#[test]
fn nested_composites_recurse() {
    let sample = json!([{
        "id": 1,
        "drops": [ { "item": "gold", "count": 3 } ],
        "stats": { "hp": 100, "tags": ["boss"] }
    }]);
    let table = infer_table("enemies", &sample, 0).unwrap();

    let drops = table.field("drops").unwrap();
    let FieldKind::Array { element, .. } = &drops.kind else {
        panic!("drops should be an array field");
    };
    assert_eq!(element.key, "item");
    let FieldKind::Object { properties } = &element.kind else {
        panic!("drops element should be an object field");
    };
    assert_eq!(properties.len(), 2);

    let stats = table.field("stats").unwrap();
    let FieldKind::Object { properties } = &stats.kind else {
        panic!("stats should be an object field");
    };
    let tags = &properties[1];
    assert_eq!(tags.key, "tags");
    let FieldKind::Array { element, .. } = &tags.kind else {
        panic!("tags should be an array field");
    };
    assert_eq!(element.type_name(), "string");
}

#[test]
fn inference_is_idempotent_on_shape() {
    let first = json!([{ "id": 1, "name": "Sword", "flag": true }]);
    let second = json!([{ "id": 99, "name": "Axe", "flag": false }]);
    let table_a = infer_table("t", &first, 0).unwrap();
    let table_b = infer_table("t", &second, 0).unwrap();
    assert_eq!(table_a.fields, table_b.fields);
}

#[test]
fn empty_inputs_are_rejected() {
    assert!(matches!(
        infer_table("t", &json!([]), 0).unwrap_err(),
        InferError::EmptyInput(_)
    ));
    assert!(matches!(
        infer_table("t", &json!({}), 0).unwrap_err(),
        InferError::EmptyInput(_)
    ));
    assert!(matches!(
        infer_table("t", &json!({ "a": [] }), 0).unwrap_err(),
        InferError::EmptyInput(_)
    ));
}

#[test]
fn non_record_samples_are_rejected() {
    assert!(matches!(
        infer_table("t", &json!(42), 0).unwrap_err(),
        InferError::InvalidShape(_)
    ));
    assert!(matches!(
        infer_table("t", &json!([1, 2, 3]), 0).unwrap_err(),
        InferError::InvalidShape(_)
    ));
}
