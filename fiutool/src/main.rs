// fiutool/src/main.rs

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use fiufs::prelude::*;
use std::path::PathBuf;

use crate::utils::LogLevel;

#[derive(Parser)]
#[command(name = "fiutool", version, about = "FiUnamFS volume tool", long_about = None)]
struct Cli {
    /// Volume image path
    #[arg(short, long, global = true, default_value = "fiunamfs.img")]
    image: PathBuf,

    /// Only print errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Print per-operation detail
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show volume metadata and cluster usage
    Info,
    /// List the files in the volume
    List,
    /// Copy a file out of the volume
    Extract {
        /// File name inside the volume
        name: String,

        /// Destination directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Copy a local file into the volume
    Insert {
        /// Source file path
        source: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    utils::set_log_level(match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Quiet,
        (_, true) => LogLevel::Verbose,
        _ => LogLevel::Normal,
    });

    let volume = Volume::open(&cli.image)
        .map_err(|e| anyhow::anyhow!("{}: {e}", cli.image.display()))?;
    log_verbose!("Opened volume image {}", cli.image.display());

    match cli.command {
        Commands::Info => commands::info(&volume),
        Commands::List => commands::list(&volume),
        Commands::Extract { name, out } => commands::extract(&volume, &name, &out),
        Commands::Insert { source } => commands::insert(&volume, &source),
    }
}
