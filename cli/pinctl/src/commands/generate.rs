//! Generate command.

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swedish_pin::{FormatLength, Generator, PinError, SequenceNumber};

use crate::output::{print_output, PinRow};

use super::{parse_length, CommandContext};

/// Generate command - produce checksum-valid numbers for test data.
///
/// Generated numbers may belong to real people; never use them for anything
/// with real effect.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Birth date (YYYY-MM-DD). Random within the last 110 years if omitted.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Sequence number (0-999). Random if omitted.
    #[arg(long)]
    sequence: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// How many numbers to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Digits in the rendered number (10 or 12).
    #[arg(long, default_value = "10", value_parser = parse_length)]
    length: FormatLength,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let sequence = self
            .sequence
            .as_deref()
            .map(str::parse::<SequenceNumber>)
            .transpose()
            .context("Invalid --sequence")?;

        let rows = match self.seed {
            Some(seed) => self.rows(StdRng::seed_from_u64(seed), sequence, ctx),
            None => self.rows(rand::rng(), sequence, ctx),
        }
        .context("Invalid --date")?;

        print_output(&rows, ctx.format);
        Ok(ExitCode::SUCCESS)
    }

    fn rows<R: Rng>(
        &self,
        rng: R,
        sequence: Option<SequenceNumber>,
        ctx: &CommandContext,
    ) -> Result<Vec<PinRow>, PinError> {
        let mut generator = Generator::new(rng).with_today(ctx.now);
        (0..self.count)
            .map(|_| {
                let pin = generator.generate(self.date, sequence)?;
                Ok(PinRow::new(&pin, self.length, ctx.now))
            })
            .collect()
    }
}
