use anyhow::Result;
use clap::Parser;

use tablekit_cli::cli::{Cli, Command};
use tablekit_cli::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity.tracing_level_filter(), cli.log_format);

    match cli.command {
        Command::New { file } => {
            commands::create(&file)?;
            println!("Created {}", file.display());
        }
        Command::Info { file } => {
            println!("{}", commands::info(&file)?);
        }
        Command::Import { file, json, key } => {
            let key = commands::import(&file, &json, key)?;
            println!("Imported table {key:?}");
        }
        Command::Export {
            file,
            root,
            name,
            index,
        } => {
            let summary = commands::export(&file, &root, name, index)?;
            for table in &summary.tables {
                let status = if table.declaration_written {
                    "written"
                } else {
                    "up to date"
                };
                println!(
                    "{}: {} data file(s), declaration {status}",
                    table.table_key,
                    table.data_files.len()
                );
            }
            if let Some(index_path) = &summary.index_path {
                println!("index: {}", index_path.display());
            }
        }
        Command::Schema { file, table } => {
            print!("{}", commands::schema(&file, &table)?);
        }
    }
    Ok(())
}
