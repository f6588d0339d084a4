//! Parse and format commands.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use swedish_pin::FormatLength;

use crate::output::{print_output, print_value, PinRow};

use super::{parse_length, CommandContext};

/// Parse command - show the fields of a number.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The number to parse.
    input: String,

    /// Digits in the rendered number (10 or 12).
    #[arg(long, default_value = "10", value_parser = parse_length)]
    length: FormatLength,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let pin = swedish_pin::parse_at(&self.input, ctx.now)?;
        print_output(&[PinRow::new(&pin, self.length, ctx.now)], ctx.format);
        Ok(ExitCode::SUCCESS)
    }
}

/// Format command - print a number in the requested format.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// The number to format.
    input: String,

    /// Digits in the rendered number (10 or 12).
    #[arg(long, value_parser = parse_length)]
    length: FormatLength,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let pin = swedish_pin::parse_at(&self.input, ctx.now)?;
        print_value(&pin.format(self.length, ctx.now), ctx.format);
        Ok(ExitCode::SUCCESS)
    }
}
