mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jsonform", version, about = "Inspect and edit JSON configuration documents")]
pub struct Args {
    /// Document to edit. The built-in sample is used when absent.
    #[arg(long, env = "JSONFORM_INPUT")]
    input: Option<PathBuf>,

    /// Editor settings file (JSON).
    #[arg(long, env = "JSONFORM_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "JSONFORM_READ_ONLY")]
    read_only: bool,

    #[arg(long, env = "JSONFORM_SHOW_PATHS", conflicts_with = "hide_paths")]
    show_paths: Option<bool>,

    #[arg(long)]
    hide_paths: bool,

    #[arg(long, env = "JSONFORM_HISTORY_LIMIT")]
    history_limit: Option<usize>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log filter, e.g. `debug` or `jsonform_editor=debug`.
    #[arg(long, env = "JSONFORM_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the document as a form outline.
    Show {
        /// Emit the outline rows as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the value at a path.
    Get { path: String },
    /// Set the value at a path and print the document.
    Set {
        path: String,
        value: String,
        /// Parse the value as JSON instead of coercing it by the field's kind.
        #[arg(long)]
        json: bool,
    },
    /// Delete the value at a path and print the document.
    Delete { path: String },
    /// Apply a JSON array of edits from a file and print the document.
    Apply { edits: PathBuf },
    /// Print the document.
    Export,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdout = std::io::stdout();
    match commands::run(args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
