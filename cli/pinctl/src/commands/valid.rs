//! Valid command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::output::OutputFormat;

use super::CommandContext;

/// Valid command - report whether a number is valid.
#[derive(Debug, Args)]
pub struct ValidCommand {
    /// The number to check.
    input: String,
}

#[derive(Debug, Serialize)]
struct Verdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl ValidCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let reason = swedish_pin::parse_at(&self.input, ctx.now)
            .err()
            .map(|e| e.kind().map_or("invalid_argument", |k| k.as_str()));
        let verdict = Verdict {
            valid: reason.is_none(),
            reason,
        };

        match ctx.format {
            OutputFormat::Table if verdict.valid => println!("{}", "valid".green()),
            OutputFormat::Table => println!("{}", "invalid".red()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&verdict)?),
        }

        Ok(if verdict.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
