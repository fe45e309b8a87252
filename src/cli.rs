use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::core::{self, config::Config, error::ForgeError};

#[derive(Debug, Parser)]
#[command(
    name = "jsonforge",
    version,
    about = "Create or modify a JSON fixture file next to this program"
)]
pub struct Cli {
    /// Directory holding fixture files (defaults to the program's own directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new file
    #[command(visible_alias = "c")]
    Create(CreateArgs),
    /// Modify an existing file
    #[command(visible_alias = "m")]
    Modify(ModifyArgs),
}

#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// File name
    pub file: String,
    /// Number of elements to create
    #[arg(allow_hyphen_values = true)]
    pub elements: i64,
}

#[derive(Debug, Parser)]
pub struct ModifyArgs {
    /// File name
    pub file: String,
    /// Index of the element to modify
    #[arg(allow_hyphen_values = true)]
    pub index: i64,
    /// New value for 'name' field, as name=<value>
    pub name: String,
}

pub fn print_help() -> Result<(), ForgeError> {
    Cli::command()
        .print_help()
        .map_err(|e| ForgeError::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })
}

pub fn execute(command: Commands, config: &Config) -> Result<(), ForgeError> {
    match command {
        Commands::Create(args) => {
            let outcome = core::create(config, &args.file, args.elements)?;
            println!(
                "File {} created successfully to {}.",
                outcome.file_name,
                config.base_dir().display()
            );
        }
        Commands::Modify(args) => {
            let outcome = core::modify(config, &args.file, args.index, &args.name)?;
            println!("File {} modified successfully.", outcome.file_name);
        }
    }
    Ok(())
}
