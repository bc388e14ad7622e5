//! Aggregated declaration index generation.

use crate::declaration::{declaration_name, generated_header};

/// One table's entry in the aggregated index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub table_key: String,
    /// Import path relative to the declaration root, e.g.
    /// `./config/item/IDrop`.
    pub import_path: String,
}

impl IndexEntry {
    pub fn new(table_key: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            table_key: table_key.into(),
            import_path: import_path.into(),
        }
    }
}

/// Index file re-exporting every table declaration, one line per table in
/// the order given by the caller.
pub fn index_file(entries: &[IndexEntry], generated_at: &str) -> String {
    let mut lines = generated_header("Table data interface index", generated_at);
    lines.push(String::new());
    for entry in entries {
        let name = declaration_name(&entry.table_key);
        lines.push(format!(
            "export type {{ {name}, {name}Map }} from '{}';",
            entry.import_path
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
