//! Declaration and data-file generation.
//!
//! Projects table schemas into TypeScript declaration text, an aggregated
//! index, and pretty-printed JSON data payloads. All generation is
//! deterministic: the only varying content is the `Generated at:` header
//! line, which [`strip_timestamp`] removes for comparisons.

mod content;
mod declaration;
mod index;
mod payload;

pub use content::{content_changed, content_fingerprint, strip_timestamp};
pub use declaration::{
    declaration_file, declaration_file_name, declaration_name, table_declaration,
};
pub use index::{IndexEntry, index_file};
pub use payload::{record_payload, table_payload};

/// Format a generation timestamp for file headers.
pub fn format_generated_at(now: chrono::DateTime<chrono::Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
