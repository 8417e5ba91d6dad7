//! apisurface CLI
//!
//! Command-line interface for exporting API surface snapshots

use apisurface_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod model_file;

#[derive(Debug, Parser)]
#[command(name = "apisurface")]
#[command(about = "apisurface - Canonical API surface snapshots", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write the snapshot file for a model description
    Export(commands::export::ExportArgs),
    /// Print the snapshot of a model description to stdout
    Print(commands::print::PrintArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Export(args) => commands::export::execute(args),
        Commands::Print(args) => commands::print::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
