//! CLI commands.

mod generate;
mod parse;
mod valid;

use std::process::ExitCode;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use swedish_pin::FormatLength;

use crate::config::Config;
use crate::output::OutputFormat;

/// pin - inspect, validate and generate Swedish personnummer.
#[derive(Debug, Parser)]
#[command(name = "pin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reference date (YYYY-MM-DD) used instead of today.
    ///
    /// Affects century guessing, the 10-digit separator, age and the
    /// window for random birth dates.
    #[arg(long, global = true)]
    now: Option<NaiveDate>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a number and show its fields.
    Parse(parse::ParseCommand),

    /// Print a number in the 10- or 12-digit format.
    Format(parse::FormatCommand),

    /// Check whether a number is valid (exit code 1 if not).
    Valid(valid::ValidCommand),

    /// Generate synthetic numbers for test data.
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let ctx = CommandContext {
            now: self
                .now
                .or(config.reference_date)
                .unwrap_or_else(|| Local::now().date_naive()),
            format: self.output.unwrap_or(config.output),
        };

        tracing::debug!(now = %ctx.now, format = ?ctx.format, "running command");

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Valid(cmd) => cmd.run(&ctx),
            Commands::Generate(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    /// Reference date for every time-dependent operation.
    pub now: NaiveDate,
    pub format: OutputFormat,
}

/// Parse a `--length` value.
fn parse_length(s: &str) -> Result<FormatLength, String> {
    let length: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    FormatLength::try_from(length).map_err(|e| e.to_string())
}
