//! Schema inference from sample JSON.
//!
//! Two input shapes are supported: an array of records, where each element
//! becomes one data item, and an object map, where each entry's key is the
//! record key and its value the payload. The field schema is inferred once
//! from a single representative sample (the first record) and reused for
//! every record; divergent shapes across records are not reconciled.

use serde_json::{Map, Value};

use tablekit_model::{ARRAY_ELEMENT_KEY, FieldDef, TableDataItem, TableDef};

use crate::error::{InferError, Result};

/// Derive a table definition, fields and data, from sample JSON.
pub fn infer_table(key: &str, sample: &Value, next_index: i64) -> Result<TableDef> {
    match sample {
        Value::Array(items) => table_from_array(key, items, next_index),
        Value::Object(entries) => table_from_object(key, entries, next_index),
        other => Err(InferError::InvalidShape(format!(
            "expected a JSON array or object, got {}",
            json_type_name(other)
        ))),
    }
}

/// Array input: every element is one record.
fn table_from_array(key: &str, items: &[Value], next_index: i64) -> Result<TableDef> {
    let first = items
        .first()
        .ok_or(InferError::EmptyInput("array has no elements"))?;
    let fields = analyze_fields(first)?;

    let mut table = base_table(key, next_index, fields, "Imported from JSON array");
    for (position, item) in items.iter().enumerate() {
        let record_key = record_key_for(item, position);
        table.set_item(
            record_key,
            TableDataItem {
                index: position as i64,
                info: item.clone(),
            },
        );
    }

    tracing::debug!(
        table = key,
        fields = table.fields.len(),
        records = items.len(),
        "inferred table from JSON array"
    );
    Ok(table)
}

/// Map input: entry keys become record keys.
fn table_from_object(key: &str, entries: &Map<String, Value>, next_index: i64) -> Result<TableDef> {
    let (_, first_value) = entries
        .iter()
        .next()
        .ok_or(InferError::EmptyInput("object has no entries"))?;

    // A map value may itself be a list of records; the schema then comes
    // from the list's first element, not from the list wrapper.
    let representative = match first_value {
        Value::Array(list) => list
            .first()
            .ok_or(InferError::EmptyInput("first entry's array has no elements"))?,
        other => other,
    };
    let fields = analyze_fields(representative)?;

    let mut table = base_table(key, next_index, fields, "Imported from JSON object");
    for (position, (record_key, value)) in entries.iter().enumerate() {
        table.set_item(
            record_key.clone(),
            TableDataItem {
                index: position as i64,
                info: value.clone(),
            },
        );
    }

    tracing::debug!(
        table = key,
        fields = table.fields.len(),
        records = entries.len(),
        "inferred table from JSON object"
    );
    Ok(table)
}

fn base_table(key: &str, next_index: i64, fields: Vec<FieldDef>, desc: &str) -> TableDef {
    let mut table = TableDef::new(next_index, key);
    table.desc = desc.to_owned();
    table.list_display_field = fields
        .first()
        .map(|field| field.key.clone())
        .unwrap_or_default();
    table.fields = fields;
    table
}

/// Infer one field per key of the representative record.
fn analyze_fields(sample: &Value) -> Result<Vec<FieldDef>> {
    let record = sample.as_object().ok_or_else(|| {
        InferError::InvalidShape(format!(
            "representative sample must be a record, got {}",
            json_type_name(sample)
        ))
    })?;
    Ok(record
        .iter()
        .map(|(key, value)| detect_field(key, value))
        .collect())
}

/// Build a field definition for one sample value, recursing into
/// composites.
fn detect_field(key: &str, value: &Value) -> FieldDef {
    match value {
        Value::Number(_) => FieldDef::number(key, key),
        Value::Bool(_) => FieldDef::boolean(key, key),
        Value::Array(list) => {
            // Element type comes from the first element; an empty array
            // falls back to a string element so inference stays total.
            let element = match list.first() {
                Some(first) => detect_field(ARRAY_ELEMENT_KEY, first),
                None => FieldDef::string(ARRAY_ELEMENT_KEY, ARRAY_ELEMENT_KEY),
            };
            FieldDef::array(key, key, element)
        }
        Value::Object(entries) => {
            let properties = entries
                .iter()
                .map(|(property_key, property_value)| {
                    detect_field(property_key, property_value)
                })
                .collect();
            FieldDef::object(key, key, properties)
        }
        // Strings, plus null for lack of better evidence.
        Value::String(_) | Value::Null => FieldDef::string(key, key),
    }
}

/// Record key for an array element: a stringified `id` or `key`
/// attribute when present, else a synthetic positional key.
fn record_key_for(item: &Value, position: usize) -> String {
    item.get("id")
        .and_then(scalar_key)
        .or_else(|| item.get("key").and_then(scalar_key))
        .unwrap_or_else(|| format!("item_{position}"))
}

fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
