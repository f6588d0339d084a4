//! Error display for the CLI.

use colored::Colorize;
use swedish_pin::{ParseErrorKind, PinError};

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<PinError>().and_then(hint) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &PinError) -> Option<&'static str> {
    match err.kind()? {
        ParseErrorKind::InvalidFormat => {
            Some("Hint: expected yymmdd-nnnc or yyyymmdd-nnnc, with optional '-', '+' or space.")
        }
        ParseErrorKind::Checksum => Some("Hint: the last digit does not match; check for typos."),
        ParseErrorKind::InvalidDate => None,
    }
}
