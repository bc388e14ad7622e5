//! Batch export orchestration.
//!
//! A plain ordered loop over the data source's tables: plan the layout,
//! render payload and declaration, write through the [`FileAccess`]
//! collaborator, then emit the aggregated index. Declarations whose
//! content is unchanged (timestamp line aside) are left untouched.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use tablekit_codegen::{
    IndexEntry, content_changed, declaration_file, format_generated_at, index_file,
    record_payload, table_payload,
};
use tablekit_model::{DataSource, TableDef};

use crate::fs::FileAccess;
use crate::plan::{DataLayout, TableExportPlan, index_path, plan_table};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("payload rendering failed: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Options for a batch export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output root directory.
    pub root: PathBuf,
    /// Data-source name (container file stem); first path segment under
    /// the root.
    pub source_name: String,
    /// Write the aggregated index. `None` follows the data source's
    /// `syncInterface` flag.
    pub write_index: Option<bool>,
    /// Timestamp text for generated headers; `None` uses the current
    /// time.
    pub generated_at: Option<String>,
}

impl ExportOptions {
    pub fn new(root: impl Into<PathBuf>, source_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            source_name: source_name.into(),
            write_index: None,
            generated_at: None,
        }
    }
}

/// What happened to one table during an export.
#[derive(Debug, Clone)]
pub struct TableExportOutcome {
    pub table_key: String,
    pub data_files: Vec<PathBuf>,
    pub declaration_path: PathBuf,
    /// False when the existing declaration was up to date.
    pub declaration_written: bool,
}

/// Result of a batch export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub tables: Vec<TableExportOutcome>,
    pub index_path: Option<PathBuf>,
}

/// Export every table of the data source, ordered by table index.
pub fn export_data_source(
    fs: &impl FileAccess,
    source: &DataSource,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let generated_at = options
        .generated_at
        .clone()
        .unwrap_or_else(|| format_generated_at(Utc::now()));

    let mut outcomes = Vec::new();
    let mut entries = Vec::new();

    for (table_key, table) in source.table_list() {
        let plan = plan_table(&options.root, &options.source_name, table_key, table);
        let outcome = export_table(fs, table_key, table, &plan, &generated_at)?;
        entries.push(IndexEntry::new(table_key, plan.import_path.clone()));
        outcomes.push(outcome);
    }

    let write_index = options
        .write_index
        .unwrap_or(source.sync_interface.unwrap_or(false));
    let index_path = if write_index && !entries.is_empty() {
        let path = index_path(&options.root, &options.source_name);
        fs.write_text(&path, &index_file(&entries, &generated_at))?;
        Some(path)
    } else {
        None
    };

    Ok(ExportSummary {
        tables: outcomes,
        index_path,
    })
}

fn export_table(
    fs: &impl FileAccess,
    table_key: &str,
    table: &TableDef,
    plan: &TableExportPlan,
    generated_at: &str,
) -> Result<TableExportOutcome> {
    let mut data_files = Vec::new();
    match &plan.data {
        DataLayout::Merged { path } => {
            fs.write_text(path, &table_payload(table)?)?;
            data_files.push(path.clone());
        }
        DataLayout::PerRecord { dir } => {
            for (record_key, item) in table.items_by_index() {
                let path = dir.join(format!("{record_key}.json"));
                fs.write_text(&path, &record_payload(&item.info)?)?;
                data_files.push(path);
            }
        }
    }

    let declaration = declaration_file(table_key, table, generated_at);
    let declaration_written = !declaration_up_to_date(fs, &plan.declaration_path, &declaration);
    if declaration_written {
        fs.write_text(&plan.declaration_path, &declaration)?;
    }

    tracing::debug!(
        table = table_key,
        data_files = data_files.len(),
        declaration_written,
        "exported table"
    );

    Ok(TableExportOutcome {
        table_key: table_key.to_owned(),
        data_files,
        declaration_path: plan.declaration_path.clone(),
        declaration_written,
    })
}

fn declaration_up_to_date(fs: &impl FileAccess, path: &Path, rendered: &str) -> bool {
    match fs.read_text(path) {
        Ok(existing) => !content_changed(&existing, rendered),
        Err(_) => false,
    }
}
