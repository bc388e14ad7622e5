//! Data source and table definitions.
//!
//! A [`DataSource`] is the root persisted object: every table the editor
//! session owns, plus format bookkeeping. It is mutated only through the
//! explicit table operations below; structural field edits always replace
//! whole definitions rather than patching nodes in place.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::field::FieldDef;

/// Current data-source format version.
pub const DATA_SOURCE_VERSION: u32 = 1;

/// One record of a table: original ordering plus the untyped payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDataItem {
    pub index: i64,
    pub info: Value,
}

/// Schema and records for one logical table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDef {
    /// Display/export ordering. Unique among sibling tables, not
    /// necessarily contiguous.
    pub index: i64,
    pub name: String,
    /// Relative directory fragment under the export roots; empty = root.
    pub export_path: String,
    pub desc: String,
    pub separate_export: bool,
    /// Key of the field shown in list views; may be empty.
    pub list_display_field: String,
    pub fields: Vec<FieldDef>,
    pub data: BTreeMap<String, TableDataItem>,
}

impl TableDef {
    pub fn new(index: i64, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            export_path: String::new(),
            desc: String::new(),
            separate_export: false,
            list_display_field: String::new(),
            fields: Vec::new(),
            data: BTreeMap::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Append a field definition, rejecting a key already declared at this
    /// scope.
    pub fn add_field(&mut self, field: FieldDef) -> Result<()> {
        if self.field(&field.key).is_some() {
            return Err(ModelError::DuplicateKey {
                scope: "field",
                key: field.key,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn remove_field(&mut self, key: &str) -> Result<FieldDef> {
        match self.fields.iter().position(|field| field.key == key) {
            Some(pos) => Ok(self.fields.remove(pos)),
            None => Err(ModelError::FieldNotFound {
                key: key.to_owned(),
            }),
        }
    }

    /// Insert or replace the record stored under `key`.
    pub fn set_item(&mut self, key: impl Into<String>, item: TableDataItem) {
        self.data.insert(key.into(), item);
    }

    /// Records in their original order (by item index, then key for
    /// items sharing an index).
    pub fn items_by_index(&self) -> Vec<(&str, &TableDataItem)> {
        let mut items: Vec<(&str, &TableDataItem)> = self
            .data
            .iter()
            .map(|(key, item)| (key.as_str(), item))
            .collect();
        items.sort_by_key(|(key, item)| (item.index, *key));
        items
    }

    /// First record by item index, if any.
    pub fn first_item(&self) -> Option<&TableDataItem> {
        self.data.values().min_by_key(|item| item.index)
    }

    /// True when this table's payload is a list of records: each item's
    /// `info` is itself an array. Decided by inspecting the first record.
    pub fn is_list_data(&self) -> bool {
        self.first_item().is_some_and(|item| item.info.is_array())
    }
}

/// Parameters for creating or updating a table. `None` leaves the
/// existing value untouched on update and picks the documented default on
/// create.
#[derive(Debug, Clone, Default)]
pub struct TableParams {
    pub name: String,
    pub export_path: Option<String>,
    pub desc: Option<String>,
    pub separate_export: Option<bool>,
    pub list_display_field: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

impl TableParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Root paths for generated artifacts, persisted alongside the tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_root: Option<String>,
}

/// Root persisted object holding all tables for one container file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch; restamped on every serialize.
    pub updated_at: i64,
    pub version: u32,
    /// Tables by key. Insertion order is irrelevant; `TableDef::index`
    /// defines ordering.
    pub data: BTreeMap<String, TableDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_settings: Option<ExportSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_interface: Option<bool>,
}

impl DataSource {
    /// Fresh empty data source stamped with the current time.
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now().timestamp_millis())
    }

    /// Fresh empty data source with an explicit creation timestamp.
    pub fn with_timestamp(now_ms: i64) -> Self {
        Self {
            created_at: now_ms,
            updated_at: now_ms,
            version: DATA_SOURCE_VERSION,
            data: BTreeMap::new(),
            export_settings: None,
            sync_interface: None,
        }
    }

    pub fn table(&self, key: &str) -> Option<&TableDef> {
        self.data.get(key)
    }

    pub fn table_mut(&mut self, key: &str) -> Option<&mut TableDef> {
        self.data.get_mut(key)
    }

    pub fn contains_table(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Next free ordering index: one past the current maximum, or 0.
    pub fn next_table_index(&self) -> i64 {
        self.data
            .values()
            .map(|table| table.index)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Add a table under `key`, assigning it the next ordering index.
    pub fn add_table(&mut self, key: impl Into<String>, params: TableParams) -> Result<&TableDef> {
        let key = key.into();
        if self.data.contains_key(&key) {
            return Err(ModelError::DuplicateKey {
                scope: "table",
                key,
            });
        }
        let table = TableDef {
            index: self.next_table_index(),
            name: params.name,
            export_path: params.export_path.unwrap_or_default(),
            desc: params.desc.unwrap_or_default(),
            separate_export: params.separate_export.unwrap_or(false),
            list_display_field: params.list_display_field.unwrap_or_default(),
            fields: params.fields.unwrap_or_default(),
            data: BTreeMap::new(),
        };
        Ok(self.data.entry(key).or_insert(table))
    }

    /// Insert a fully built table definition (e.g. from inference) under
    /// `key`, keeping whatever index it carries.
    pub fn insert_table(&mut self, key: impl Into<String>, table: TableDef) -> Result<&TableDef> {
        let key = key.into();
        if self.data.contains_key(&key) {
            return Err(ModelError::DuplicateKey {
                scope: "table",
                key,
            });
        }
        Ok(self.data.entry(key).or_insert(table))
    }

    /// Apply the non-`None` parts of `params` to an existing table.
    pub fn update_table(&mut self, key: &str, params: TableParams) -> Result<()> {
        let table = self
            .data
            .get_mut(key)
            .ok_or_else(|| ModelError::TableNotFound {
                key: key.to_owned(),
            })?;
        if !params.name.is_empty() {
            table.name = params.name;
        }
        if let Some(export_path) = params.export_path {
            table.export_path = export_path;
        }
        if let Some(desc) = params.desc {
            table.desc = desc;
        }
        if let Some(separate_export) = params.separate_export {
            table.separate_export = separate_export;
        }
        if let Some(list_display_field) = params.list_display_field {
            table.list_display_field = list_display_field;
        }
        if let Some(fields) = params.fields {
            table.fields = fields;
        }
        Ok(())
    }

    pub fn remove_table(&mut self, key: &str) -> Result<TableDef> {
        self.data
            .remove(key)
            .ok_or_else(|| ModelError::TableNotFound {
                key: key.to_owned(),
            })
    }

    /// Swap the ordering indices of two tables.
    pub fn swap_table_order(&mut self, first: &str, second: &str) -> Result<()> {
        for key in [first, second] {
            if !self.data.contains_key(key) {
                return Err(ModelError::TableNotFound {
                    key: key.to_owned(),
                });
            }
        }
        let first_index = self.data[first].index;
        let second_index = self.data[second].index;
        if let Some(table) = self.data.get_mut(first) {
            table.index = second_index;
        }
        if let Some(table) = self.data.get_mut(second) {
            table.index = first_index;
        }
        Ok(())
    }

    /// Tables sorted by their ordering index.
    pub fn table_list(&self) -> Vec<(&str, &TableDef)> {
        let mut tables: Vec<(&str, &TableDef)> = self
            .data
            .iter()
            .map(|(key, table)| (key.as_str(), table))
            .collect();
        tables.sort_by_key(|(key, table)| (table.index, *key));
        tables
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new()
    }
}
