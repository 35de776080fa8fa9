//! CLI for qrbatch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use qrbatch_core::config::{self, QrBatchConfig};
use std::path::PathBuf;

use commands::{
    run_check, run_completions, run_generate, run_sample, run_templates, GenerateArgs,
};

/// Top-level CLI for qrbatch.
#[derive(Debug, Parser)]
#[command(name = "qrbatch")]
#[command(about = "qrbatch: turn CSV rows into labeled QR codes bundled in a ZIP", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/qrbatch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate one labeled QR PNG per CSV row and write them to a ZIP archive.
    Generate {
        /// CSV file with a header row.
        input: PathBuf,

        /// Template to validate and render with (defaults to the configured default).
        #[arg(short, long)]
        template: Option<String>,

        /// Where to write the archive.
        #[arg(short, long, default_value = "qr_codes.zip")]
        output: PathBuf,

        /// Also write a JSON report of entries and skipped rows.
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Render rows on N threads (entry order is unaffected).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// Validate a CSV header against a template without generating anything.
    Check {
        /// CSV file with a header row.
        input: PathBuf,

        /// Template to validate against.
        #[arg(short, long)]
        template: Option<String>,
    },

    /// List available templates.
    Templates,

    /// Write a sample CSV for a template.
    Sample {
        /// Template name.
        template: String,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<QrBatchConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = load_config(cli.config.as_ref())?;

        match cli.command {
            CliCommand::Generate {
                input,
                template,
                output,
                report,
                workers,
            } => run_generate(
                &cfg,
                GenerateArgs {
                    input,
                    template,
                    output,
                    report,
                    workers,
                },
            )?,
            CliCommand::Check { input, template } => {
                run_check(&cfg, &input, template.as_deref())?
            }
            CliCommand::Templates => run_templates(&cfg),
            CliCommand::Sample { template, output } => {
                run_sample(&cfg, &template, output.as_deref())?
            }
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
