//! CLI for the urlsift URL filter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlsift_core::config;

use commands::{run_filter, run_inspect};

/// Top-level CLI for urlsift.
#[derive(Debug, Parser)]
#[command(name = "urlsift")]
#[command(about = "urlsift: reduce recon URL lists to unique, interesting endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Filter a URL list (plain or JSON lines) into a destination file.
    Filter {
        /// Source file: one URL per line, or one JSON object per line with --json-field.
        src: PathBuf,
        /// Destination file; parent directories are created, existing content is replaced.
        dst: PathBuf,
        /// Read URLs from this string field of each JSON line and emit the original lines.
        #[arg(long, value_name = "FIELD")]
        json_field: Option<String>,
    },

    /// Show how URLs are classified and which template key they map to.
    Inspect {
        /// URLs to inspect.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Filter {
                src,
                dst,
                json_field,
            } => {
                let field = json_field.or_else(|| cfg.json_field.clone());
                run_filter(&cfg, &src, &dst, field.as_deref())?;
            }
            CliCommand::Inspect { urls } => run_inspect(&cfg, &urls)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
