//! Dayshape CLI - reshape weekday CSV columns into per-day records
//!
//! # Commands
//!
//! ```bash
//! dayshape run                        # Every CSV in config.yaml's folder
//! dayshape run --folder data          # Every CSV in ./data
//! dayshape process a.csv b.csv        # Explicit files
//! dayshape columns a.csv              # Columns after range expansion
//! ```

use clap::{Parser, Subcommand};
use dayshape::config::Config;
use dayshape::logs::{log_info, log_warning, LOG_BROADCASTER};
use dayshape::transform::pipeline::load_expanded;
use dayshape::{discover_csv_files, process_files, render_reports, write_output, BatchResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dayshape")]
#[command(about = "Reshape weekday CSV columns into per-day records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every CSV in the configured folder
    Run {
        /// Config file (default: $DAYSHAPE_CONFIG or config.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Folder to scan, bypassing the config file
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not echo logs to stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Process the given CSV files in order
    Process {
        /// Input CSV files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not echo logs to stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show column names after normalization and range expansion
    Columns {
        /// Input CSV file
        file: PathBuf,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            folder,
            output,
            quiet,
        } => {
            LOG_BROADCASTER.set_echo(!quiet);
            cmd_run(config.as_deref(), folder, output.as_deref())
        }

        Commands::Process { files, output, quiet } => {
            LOG_BROADCASTER.set_echo(!quiet);
            cmd_process(&files, output.as_deref())
        }

        Commands::Columns { file } => cmd_columns(&file),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_run(
    config_path: Option<&Path>,
    folder: Option<PathBuf>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match (folder, config_path) {
        (Some(folder), _) => Config::new(folder),
        (None, Some(path)) => Config::load(path)?,
        (None, None) => Config::from_env()?,
    };

    let folder = config.folder();
    log_info(format!("📂 Scanning: {} ({})", folder.display(), config.pattern));

    let files = discover_csv_files(&config)?;
    if files.is_empty() {
        log_warning(format!("No files matching '{}' in {}", config.pattern, folder.display()));
    }

    finish(process_files(&files), output)
}

fn cmd_process(files: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    finish(process_files(files), output)
}

fn cmd_columns(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_expanded(file)?;
    for name in table.column_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Write the successful reports, then fail if any file failed.
fn finish(result: BatchResult, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    write_output(&render_reports(&result.reports)?, output)?;
    log_info(result.summary());

    if result.is_ok() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed", result.failures.len()).into())
    }
}
