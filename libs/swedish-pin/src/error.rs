//! Error types for parsing, formatting and generating identity numbers.

use thiserror::Error;

/// The reason a string was rejected by the parser.
///
/// Checks run in a fixed order (format, then checksum, then date), so a
/// rejected input always reports exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input does not have the shape of a personnummer.
    InvalidFormat,
    /// The control digit does not match the rest of the number.
    Checksum,
    /// The embedded date is not a calendar date.
    InvalidDate,
}

impl ParseErrorKind {
    /// Stable lowercase name, used in logs and machine-readable output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::InvalidFormat => "invalid_format",
            ParseErrorKind::Checksum => "checksum",
            ParseErrorKind::InvalidDate => "invalid_date",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when working with personnummer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PinError {
    /// The input did not match the expected format. This happens when the
    /// string has the wrong length or contains extra characters.
    #[error("input did not match expected format: {input:?}")]
    InvalidFormat { input: String },

    /// The control digit at the end does not match the rest of the input.
    /// Usually a typo.
    #[error("control digit did not match expected value: {input:?}")]
    InvalidChecksum { input: String },

    /// The date embedded in the input is not valid.
    #[error("invalid date in {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    /// A caller supplied an argument outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PinError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        PinError::InvalidFormat {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_checksum(input: &str) -> Self {
        PinError::InvalidChecksum {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        PinError::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the parse failure kind, or `None` for argument errors.
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            PinError::InvalidFormat { .. } => Some(ParseErrorKind::InvalidFormat),
            PinError::InvalidChecksum { .. } => Some(ParseErrorKind::Checksum),
            PinError::InvalidDate { .. } => Some(ParseErrorKind::InvalidDate),
            PinError::InvalidArgument(_) => None,
        }
    }

    /// Returns the original input that failed to parse.
    pub fn input(&self) -> Option<&str> {
        match self {
            PinError::InvalidFormat { input }
            | PinError::InvalidChecksum { input }
            | PinError::InvalidDate { input, .. } => Some(input),
            PinError::InvalidArgument(_) => None,
        }
    }

    /// Returns true if the input had the wrong shape.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PinError::InvalidFormat { .. })
    }

    /// Returns true if the control digit was wrong.
    pub fn is_checksum(&self) -> bool {
        matches!(self, PinError::InvalidChecksum { .. })
    }

    /// Returns true if the embedded date was not a calendar date.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PinError::InvalidDate { .. })
    }

    /// Returns true if this is caller misuse rather than bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PinError::InvalidArgument(_))
    }
}
