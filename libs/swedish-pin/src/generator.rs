//! Synthetic personnummer for test data and demonstrations.
//!
//! Generated numbers are checksum-valid and may well belong to a real
//! person, so never use them for anything with real effect.

use chrono::{Datelike, Days, Local, NaiveDate};
use rand::Rng;

use crate::error::PinError;
use crate::personnummer::Personnummer;

/// Random dates are drawn from this many days before today.
pub const MAX_AGE_DAYS: u64 = 110 * 365;

/// A validated sequence number, `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceNumber(u16);

impl SequenceNumber {
    /// The largest sequence number.
    pub const MAX: Self = Self(999);

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for SequenceNumber {
    type Error = PinError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(PinError::InvalidArgument(format!(
                "sequence number must be between 0 and 999, got {value}"
            )))
        }
    }
}

impl TryFrom<u32> for SequenceNumber {
    type Error = PinError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl std::str::FromStr for SequenceNumber {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| {
            PinError::InvalidArgument(format!("sequence number is not an integer: {s:?}"))
        })?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Generates [`Personnummer`] from an injected randomness source.
///
/// Seed the source (e.g. `StdRng::seed_from_u64`) for reproducible output.
/// Generation never produces coordination numbers.
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
    today: NaiveDate,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from `rng`, anchored at today's local date.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            today: Local::now().date_naive(),
        }
    }

    /// Anchors random birth dates at `today` instead of the local date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Generates a number for the given inputs; missing ones are random.
    ///
    /// A random date is drawn from the last 110 years up to and including
    /// today, and a random sequence number from `0..=999`.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::InvalidArgument`] if the birth year is outside
    /// `0..=9999`, since no such number can be written down and parsed back.
    pub fn generate(
        &mut self,
        date: Option<NaiveDate>,
        sequence_number: Option<SequenceNumber>,
    ) -> Result<Personnummer, PinError> {
        let date = match date {
            Some(date) => date,
            None => self.random_date()?,
        };
        check_year(date)?;
        let sequence_number = sequence_number.unwrap_or_else(|| self.random_sequence_number());

        tracing::trace!(%date, sequence_number = %sequence_number, "generating personnummer");

        Ok(Personnummer::from_parts(date, sequence_number.value()))
    }

    fn random_date(&mut self) -> Result<NaiveDate, PinError> {
        let offset = self.rng.random_range(0..=MAX_AGE_DAYS);
        self.today
            .checked_sub_days(Days::new(offset))
            .ok_or_else(|| {
                PinError::InvalidArgument(format!(
                    "cannot draw a birth date {offset} days before {}",
                    self.today
                ))
            })
    }

    fn random_sequence_number(&mut self) -> SequenceNumber {
        SequenceNumber(self.rng.random_range(0..=SequenceNumber::MAX.0))
    }
}

fn check_year(date: NaiveDate) -> Result<(), PinError> {
    if (0..=9999).contains(&date.year()) {
        Ok(())
    } else {
        Err(PinError::InvalidArgument(format!(
            "birth year must be between 0 and 9999, got {}",
            date.year()
        )))
    }
}

/// Generates a number using the thread-local rng.
pub fn generate(
    date: Option<NaiveDate>,
    sequence_number: Option<SequenceNumber>,
) -> Result<Personnummer, PinError> {
    Generator::new(rand::rng()).generate(date, sequence_number)
}
