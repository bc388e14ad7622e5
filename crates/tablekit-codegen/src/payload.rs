//! Generated JSON data payloads.

use serde_json::{Map, Value};
use tablekit_model::TableDef;

/// Render one table's merged data payload: record key to `info`, ordered
/// by item index, pretty-printed.
pub fn table_payload(table: &TableDef) -> serde_json::Result<String> {
    let mut records = Map::new();
    for (key, item) in table.items_by_index() {
        records.insert(key.to_owned(), item.info.clone());
    }
    let mut text = serde_json::to_string_pretty(&Value::Object(records))?;
    text.push('\n');
    Ok(text)
}

/// Render a single record's payload, for separate-export tables.
pub fn record_payload(info: &Value) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(info)?;
    text.push('\n');
    Ok(text)
}
