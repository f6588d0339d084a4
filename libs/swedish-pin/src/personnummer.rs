//! The parsed identity number value type.

use chrono::{Datelike, Local, NaiveDate};

use crate::checksum;
use crate::date::encode_day;
use crate::error::PinError;

/// Output format for [`Personnummer::format`].
///
/// The names refer to the colloquial "10-digit" and "12-digit" formats; the
/// rendered strings are one character longer because of the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatLength {
    /// `yymmdd-nnnc` or `yymmdd+nnnc`. Depends on when it is rendered.
    #[default]
    Short,
    /// `yyyymmdd-nnnc`. Time-independent; use this for storage.
    Long,
}

impl FormatLength {
    /// The number of digits in this format.
    pub const fn digits(&self) -> u8 {
        match self {
            FormatLength::Short => 10,
            FormatLength::Long => 12,
        }
    }
}

impl TryFrom<u8> for FormatLength {
    type Error = PinError;

    fn try_from(length: u8) -> Result<Self, Self::Error> {
        match length {
            10 => Ok(FormatLength::Short),
            12 => Ok(FormatLength::Long),
            other => Err(PinError::InvalidArgument(format!(
                "the only supported lengths are 10 or 12, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for FormatLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits())
    }
}

/// A valid _personnummer_ or _samordningsnummer_ (coordination number).
///
/// Instances only come from [`crate::parse`] or the [`crate::Generator`] and
/// are immutable. Equality, hashing and ordering all follow the 12-digit
/// canonical form; ordering is chronological by birth date, then by
/// sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Personnummer {
    birthday: NaiveDate,
    sequence_number: u16,
    control_digit: u8,
    coordination_number: bool,
}

impl Personnummer {
    pub(crate) fn new(
        birthday: NaiveDate,
        coordination_number: bool,
        sequence_number: u16,
        control_digit: u8,
    ) -> Self {
        Self {
            birthday,
            sequence_number,
            control_digit,
            coordination_number,
        }
    }

    /// Creates a number for `birthday`, computing the control digit.
    pub(crate) fn from_parts(birthday: NaiveDate, sequence_number: u16) -> Self {
        let control_digit = checksum::control_digit(
            birthday.year(),
            birthday.month(),
            birthday.day(),
            sequence_number,
        );
        Self::new(birthday, false, sequence_number, control_digit)
    }

    /// The full birth year, e.g. `1985`.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.birthday.year()
    }

    /// The birth month, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.birthday.month()
    }

    /// The real day of the month, even for coordination numbers.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.birthday.day()
    }

    /// The date of birth.
    #[must_use]
    pub const fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// The three digits after the date. Zero-pad to three characters when
    /// displaying (`3` is written `003`).
    #[must_use]
    pub const fn sequence_number(&self) -> u16 {
        self.sequence_number
    }

    /// The trailing checksum digit.
    #[must_use]
    pub const fn control_digit(&self) -> u8 {
        self.control_digit
    }

    /// Returns true for a _samordningsnummer_, which has 60 added to the day
    /// (`28 + 60 = 88`).
    #[must_use]
    pub const fn is_coordination_number(&self) -> bool {
        self.coordination_number
    }

    /// Legal sex classification: odd sequence numbers are male.
    #[must_use]
    pub const fn is_male(&self) -> bool {
        self.sequence_number % 2 == 1
    }

    /// Legal sex classification: even sequence numbers are female.
    #[must_use]
    pub const fn is_female(&self) -> bool {
        self.sequence_number % 2 == 0
    }

    /// Number of whole years since birth as of `now`; never negative.
    pub fn age<T: Datelike>(&self, now: T) -> u32 {
        let passed = (now.month(), now.day()) >= (self.month(), self.day());
        let age = now.year() - self.year() - if passed { 0 } else { 1 };
        age.max(0) as u32
    }

    /// [`Personnummer::age`] as of today's local date.
    pub fn age_today(&self) -> u32 {
        self.age(Local::now().date_naive())
    }

    /// Renders the official 10-digit format: `yymmdd-nnnc`.
    ///
    /// From the year a person turns 100, the separator changes to `+`. The
    /// same number rendered at different times can therefore produce
    /// different strings, so prefer [`Personnummer::format_long`] for storage.
    pub fn format_short<T: Datelike>(&self, now: T) -> String {
        let separator = if self.year() <= now.year() - 100 {
            '+'
        } else {
            '-'
        };
        format!(
            "{:02}{:02}{:02}{}{:03}{}",
            self.year().rem_euclid(100),
            self.month(),
            self.encoded_day(),
            separator,
            self.sequence_number,
            self.control_digit
        )
    }

    /// Renders the 12-digit format: `yyyymmdd-nnnc`.
    pub fn format_long(&self) -> String {
        format!(
            "{:04}{:02}{:02}-{:03}{}",
            self.year(),
            self.month(),
            self.encoded_day(),
            self.sequence_number,
            self.control_digit
        )
    }

    /// Renders in the given format. `now` only affects the short format.
    pub fn format<T: Datelike>(&self, length: FormatLength, now: T) -> String {
        match length {
            FormatLength::Short => self.format_short(now),
            FormatLength::Long => self.format_long(),
        }
    }

    fn encoded_day(&self) -> u32 {
        encode_day(self.day(), self.coordination_number)
    }
}

impl std::fmt::Display for Personnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_long())
    }
}

impl std::str::FromStr for Personnummer {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl serde::Serialize for Personnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_long())
    }
}

/// Only the 12-digit form is accepted, so a stored value never depends on
/// the clock at load time. Parse 10-digit strings explicitly with
/// [`crate::parse_at`].
impl<'de> serde::Deserialize<'de> for Personnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match crate::tokenizer::tokenize(&s) {
            Some(tokens) if tokens.century.is_none() => Err(serde::de::Error::custom(
                "expected the 12-digit form yyyymmdd-nnnc",
            )),
            _ => crate::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
