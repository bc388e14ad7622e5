//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "tablekit", version, about = "Game configuration table toolkit")]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an empty container file.
    New {
        /// Path of the container file to create.
        file: PathBuf,
    },
    /// List the tables stored in a container.
    Info {
        /// Container file to inspect.
        file: PathBuf,
    },
    /// Import a JSON sample as a new table.
    Import {
        /// Container file to add the table to.
        file: PathBuf,
        /// JSON sample (array of records or object map).
        json: PathBuf,
        /// Table key; defaults to the JSON file stem.
        #[arg(long)]
        key: Option<String>,
    },
    /// Export data payloads and declarations for every table.
    Export {
        /// Container file to export.
        file: PathBuf,
        /// Output root directory.
        #[arg(long)]
        root: PathBuf,
        /// Data-source name; defaults to the container file stem.
        #[arg(long)]
        name: Option<String>,
        /// Write the aggregated index even when the container's
        /// sync-interface flag is off.
        #[arg(long)]
        index: bool,
    },
    /// Print a table's declaration to stdout.
    Schema {
        /// Container file to read.
        file: PathBuf,
        /// Table key.
        table: String,
    },
}
