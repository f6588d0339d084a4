//! # swedish-pin
//!
//! Parse, validate, format and generate Swedish personal identity numbers
//! (_personnummer_) and coordination numbers (_samordningsnummer_).
//!
//! ## Design Principles
//!
//! - Parsing returns a typed [`Personnummer`] or exactly one [`PinError`]
//! - Parsed values are immutable and compare by their 12-digit form
//! - Anything that depends on the current date takes it as an argument,
//!   with `*_today`/plain variants reading the local calendar date
//! - Generation takes its randomness source as an argument
//!
//! ## Formats
//!
//! ```text
//! yymmdd-nnnc      10-digit, the official form
//! yymmdd+nnnc      10-digit, from the year the person turns 100
//! yyyymmdd-nnnc    12-digit, time-independent; use for storage
//! ```
//!
//! The separator is optional when parsing and may also be a space.
//! Coordination numbers add 60 to the day of month.
//!
//! ```
//! use swedish_pin::chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! let pin = swedish_pin::parse_at("850709-9805", now).unwrap();
//! assert_eq!(pin.year(), 1985);
//! assert_eq!(pin.format_long(), "19850709-9805");
//! assert!(pin.is_female());
//! ```

mod century;
mod checksum;
mod date;
mod error;
mod generator;
mod parser;
mod personnummer;
mod tokenizer;
mod validation;

pub use checksum::{control_digit, luhn};
pub use date::COORDINATION_DAY_OFFSET;
pub use error::{ParseErrorKind, PinError};
pub use generator::{generate, Generator, SequenceNumber, MAX_AGE_DAYS};
pub use parser::{parse, parse_at, valid, valid_at};
pub use personnummer::{FormatLength, Personnummer};
pub use tokenizer::Separator;
pub use validation::{validate_personnummer, validate_personnummer_allow_blank, VALIDATION_CODE};

/// Re-export chrono for consumers constructing reference dates.
pub use chrono;
