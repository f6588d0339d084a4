//! Output formatting for CLI commands.

use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;
use swedish_pin::{FormatLength, Personnummer};
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "pin.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// One personnummer, flattened for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PinRow {
    #[tabled(rename = "Number")]
    pub number: String,
    #[tabled(rename = "Birthday")]
    pub birthday: NaiveDate,
    #[tabled(rename = "Sequence")]
    pub sequence_number: u16,
    #[tabled(rename = "Control")]
    pub control_digit: u8,
    #[tabled(rename = "Coordination")]
    pub coordination_number: bool,
    #[tabled(rename = "Sex")]
    pub sex: &'static str,
    #[tabled(rename = "Age")]
    pub age: u32,
}

impl PinRow {
    /// Build a row, rendering the number as it reads on `now`.
    pub fn new(pin: &Personnummer, length: FormatLength, now: NaiveDate) -> Self {
        Self {
            number: pin.format(length, now),
            birthday: pin.birthday(),
            sequence_number: pin.sequence_number(),
            control_digit: pin.control_digit(),
            coordination_number: pin.is_coordination_number(),
            sex: if pin.is_male() { "male" } else { "female" },
            age: pin.age(now),
        }
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single plain value, or wrap it as JSON.
pub fn print_value<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", value),
        OutputFormat::Json => println!("{}", format_json(value, "null")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or(serde_json::Value::Null);
    let wrapped = serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    });
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| fallback.to_string())
}
