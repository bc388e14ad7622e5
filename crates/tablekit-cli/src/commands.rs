//! Command implementations.
//!
//! Each command returns its printable output (or a small result value)
//! rather than printing, so integration tests can drive them directly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use comfy_table::presets::UTF8_FULL;

use tablekit_codegen::{declaration_file, format_generated_at};
use tablekit_container::{read_container, write_container};
use tablekit_export::{ExportOptions, ExportSummary, LocalFileAccess, export_data_source};
use tablekit_infer::infer_table;
use tablekit_model::DataSource;

/// Create an empty container at `file`.
pub fn create(file: &Path) -> Result<()> {
    if file.exists() {
        bail!("refusing to overwrite existing file {}", file.display());
    }
    let mut source = DataSource::new();
    write_container(file, &mut source).with_context(|| format!("create {}", file.display()))?;
    tracing::info!(file = %file.display(), "created empty container");
    Ok(())
}

/// Render the table listing for a container.
pub fn info(file: &Path) -> Result<String> {
    let source = read_container(file).with_context(|| format!("read {}", file.display()))?;

    let mut listing = comfy_table::Table::new();
    listing.load_preset(UTF8_FULL).set_header([
        "Index",
        "Key",
        "Name",
        "Fields",
        "Records",
        "Export Path",
    ]);
    for (key, table) in source.table_list() {
        listing.add_row([
            table.index.to_string(),
            key.to_owned(),
            table.name.clone(),
            table.fields.len().to_string(),
            table.data.len().to_string(),
            table.export_path.clone(),
        ]);
    }
    Ok(listing.to_string())
}

/// Import a JSON sample into the container as a new table. Returns the
/// table key used.
pub fn import(file: &Path, json: &Path, key: Option<String>) -> Result<String> {
    let mut source = read_container(file).with_context(|| format!("read {}", file.display()))?;

    let text =
        fs::read_to_string(json).with_context(|| format!("read sample {}", json.display()))?;
    let sample: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse sample {}", json.display()))?;

    let key = key.unwrap_or_else(|| table_key_from_path(json));
    let table = infer_table(&key, &sample, source.next_table_index())
        .with_context(|| format!("infer table {key:?}"))?;
    source.insert_table(key.clone(), table)?;

    write_container(file, &mut source).with_context(|| format!("write {}", file.display()))?;
    tracing::info!(table = key, "imported table");
    Ok(key)
}

/// Export every table of the container under `root`.
pub fn export(file: &Path, root: &Path, name: Option<String>, force_index: bool) -> Result<ExportSummary> {
    let source = read_container(file).with_context(|| format!("read {}", file.display()))?;
    let name = name.unwrap_or_else(|| source_name_from_path(file));

    let options = ExportOptions {
        write_index: force_index.then_some(true),
        ..ExportOptions::new(root, name)
    };
    let summary = export_data_source(&LocalFileAccess, &source, &options)
        .with_context(|| format!("export to {}", root.display()))?;
    tracing::info!(
        tables = summary.tables.len(),
        index = summary.index_path.is_some(),
        "export finished"
    );
    Ok(summary)
}

/// Render one table's declaration file content.
pub fn schema(file: &Path, table_key: &str) -> Result<String> {
    let source = read_container(file).with_context(|| format!("read {}", file.display()))?;
    let Some(table) = source.table(table_key) else {
        bail!("table {table_key:?} not found in {}", file.display());
    };
    Ok(declaration_file(
        table_key,
        table,
        &format_generated_at(Utc::now()),
    ))
}

/// Table key derived from a sample file name: the stem with anything
/// outside `[A-Za-z0-9_]` replaced by underscores.
fn table_key_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "imported_table".to_owned());
    stem.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}

/// Data-source name: the container file stem.
fn source_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tables".to_owned())
}
