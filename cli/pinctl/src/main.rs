//! pinctl (pin) - inspect, validate and generate Swedish personnummer.
//!
//! Logs go to stderr; stdout carries only command output.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config);

    match cli.run(&config) {
        Ok(code) => code,
        Err(e) => {
            error::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
