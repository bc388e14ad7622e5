//! Export planning and batch artifact generation.
//!
//! Maps each table of a data source to its on-disk layout (data payload,
//! declaration, aggregated index) under an output root, and runs the
//! batch export through a host-provided [`FileAccess`] collaborator.

mod export;
mod fs;
mod plan;

pub use export::{
    ExportError, ExportOptions, ExportSummary, Result, TableExportOutcome, export_data_source,
};
pub use fs::{FileAccess, LocalFileAccess};
pub use plan::{DataLayout, TableExportPlan, index_path, normalize_export_path, plan_table};
