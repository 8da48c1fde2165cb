//! Command-line interface for sift.
//!
//! Usage:
//!   sift extract [FILE] [--json]                       - Extract tokens from one file (or stdin)
//!   sift scan [--root DIR] [--unique] [--json]         - Scan the files matched by content globs
//!   sift purge [CLASSES] [--root DIR] [--unused]       - Filter candidate classes by usage
//!   sift config [--root DIR]                           - Print the resolved configuration
//!   sift init [--root DIR] [--name NAME] [--force]     - Write a starter sift.toml

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sift_core::errors::{ConfigError, ScanError};
use sift_core::SiftErrorCode;

#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "Extract candidate utility classes from project content")]
struct Cli {
    /// Default log level when SIFT_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by commands that read a project.
#[derive(Debug, clap::Args)]
struct ProjectArgs {
    /// Project root the content globs are relative to.
    #[arg(long, short, default_value = ".")]
    root: PathBuf,

    /// Config file. Defaults to <root>/sift.toml, or built-in defaults if absent.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract tokens from a single file, or stdin when FILE is omitted or "-".
    Extract {
        file: Option<PathBuf>,
        /// Print a JSON array instead of one token per line.
        #[arg(long)]
        json: bool,
    },
    /// Scan the project and print the extracted tokens.
    Scan {
        #[command(flatten)]
        project: ProjectArgs,
        /// Deduplicate and sort tokens.
        #[arg(long)]
        unique: bool,
        /// Print the full scan report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read candidate class names (one per line) and print those in use.
    Purge {
        #[command(flatten)]
        project: ProjectArgs,
        /// File listing candidate classes; stdin when omitted or "-".
        classes: Option<PathBuf>,
        /// Print the classes that are NOT used instead.
        #[arg(long)]
        unused: bool,
    },
    /// Print the resolved configuration as TOML.
    Config {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Write a starter sift.toml into the project root.
    Init {
        #[arg(long, short, default_value = ".")]
        root: PathBuf,
        /// Project name used in the template header.
        #[arg(long)]
        name: Option<String>,
        /// Overwrite an existing sift.toml.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    sift_core::tracing::init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Extract { file, json } => commands::extract(file.as_deref(), json),
        Command::Scan {
            project,
            unique,
            json,
        } => commands::scan(&project.root, project.config.as_deref(), unique, json),
        Command::Purge {
            project,
            classes,
            unused,
        } => commands::purge(
            &project.root,
            project.config.as_deref(),
            classes.as_deref(),
            unused,
        ),
        Command::Config { project } => {
            commands::show_config(&project.root, project.config.as_deref())
        }
        Command::Init { root, name, force } => commands::init(&root, name.as_deref(), force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

/// Prefix the stable error code when the root cause is one of ours.
fn describe(err: &anyhow::Error) -> String {
    let code = err
        .chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<ConfigError>()
                .map(|e| e.error_code())
                .or_else(|| cause.downcast_ref::<ScanError>().map(|e| e.error_code()))
        });
    match code {
        Some(code) => format!("[{code}] {err:#}"),
        None => format!("{err:#}"),
    }
}
