//! Directory layout planning for exported tables.
//!
//! For a data source named `N` under an output root `R`, table `T` with
//! export path fragment `P` lands at:
//!
//! ```text
//! R/N/json/P/<key>.json      merged data payload
//! R/N/json/P/<key>/<record>.json   per-record payloads (separate export)
//! R/N/ts/P/<DeclName>.ts     declaration
//! R/N/ts/index.ts            aggregated index
//! ```

use std::path::{Path, PathBuf};

use tablekit_codegen::{declaration_file_name, declaration_name};
use tablekit_model::TableDef;

/// Normalize an export-path fragment: forward slashes only, no leading or
/// trailing separators.
pub fn normalize_export_path(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_owned()
}

/// Where a table's data payload goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLayout {
    /// One merged JSON file for the whole table.
    Merged { path: PathBuf },
    /// One JSON file per record inside the directory.
    PerRecord { dir: PathBuf },
}

/// Planned output locations for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExportPlan {
    pub table_key: String,
    pub declaration_name: String,
    pub data: DataLayout,
    pub declaration_path: PathBuf,
    /// Import path relative to the declaration root, consumed by the
    /// index generator.
    pub import_path: String,
}

/// Plan the layout for one table.
pub fn plan_table(
    root: &Path,
    source_name: &str,
    table_key: &str,
    table: &TableDef,
) -> TableExportPlan {
    let fragment = normalize_export_path(&table.export_path);

    let mut json_dir = root.join(source_name).join("json");
    let mut ts_dir = root.join(source_name).join("ts");
    if !fragment.is_empty() {
        json_dir = json_dir.join(&fragment);
        ts_dir = ts_dir.join(&fragment);
    }

    let name = declaration_name(table_key);
    let data = if table.separate_export {
        DataLayout::PerRecord {
            dir: json_dir.join(table_key),
        }
    } else {
        DataLayout::Merged {
            path: json_dir.join(format!("{table_key}.json")),
        }
    };
    let import_path = if fragment.is_empty() {
        format!("./{name}")
    } else {
        format!("./{fragment}/{name}")
    };

    TableExportPlan {
        table_key: table_key.to_owned(),
        declaration_name: name,
        data,
        declaration_path: ts_dir.join(declaration_file_name(table_key)),
        import_path,
    }
}

/// Location of the aggregated index for a data source.
pub fn index_path(root: &Path, source_name: &str) -> PathBuf {
    root.join(source_name).join("ts").join("index.ts")
}
