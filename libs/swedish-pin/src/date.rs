//! Calendar validation of the decoded birth date.

use chrono::NaiveDate;

/// Offset added to the day of month in coordination numbers.
pub const COORDINATION_DAY_OFFSET: u32 = 60;

/// Removes the coordination offset from an encoded day.
///
/// Returns the real day and whether the offset was present. Detection is
/// exactly `encoded_day > 60`.
pub const fn decode_day(encoded_day: u32) -> (u32, bool) {
    if encoded_day > COORDINATION_DAY_OFFSET {
        (encoded_day - COORDINATION_DAY_OFFSET, true)
    } else {
        (encoded_day, false)
    }
}

/// Re-applies the coordination offset when `coordination` is set.
pub const fn encode_day(day: u32, coordination: bool) -> u32 {
    if coordination {
        day + COORDINATION_DAY_OFFSET
    } else {
        day
    }
}

/// Validates month, day and the full calendar date.
///
/// On failure, returns a human-readable reason.
pub fn validate_date(year: i32, month: u32, real_day: u32) -> Result<NaiveDate, String> {
    if !(1..=12).contains(&month) {
        return Err(format!("{month} is not a valid month"));
    }
    if !(1..=31).contains(&real_day) {
        return Err(format!("{real_day} is not a valid day"));
    }

    NaiveDate::from_ymd_opt(year, month, real_day)
        .ok_or_else(|| format!("{year:04}-{month:02}-{real_day:02} is not a calendar date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_day() {
        assert_eq!(decode_day(9), (9, false));
        assert_eq!(decode_day(60), (60, false));
        assert_eq!(decode_day(61), (1, true));
        assert_eq!(decode_day(69), (9, true));
        assert_eq!(encode_day(9, true), 69);
        assert_eq!(encode_day(9, false), 9);
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(1985, 7, 9).is_ok());
        assert!(validate_date(2000, 2, 29).is_ok());
        assert!(validate_date(1900, 2, 29).is_err());
        assert!(validate_date(2010, 2, 30).is_err());
        assert!(validate_date(2010, 4, 31).is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert_eq!(
            validate_date(1999, 13, 1).unwrap_err(),
            "13 is not a valid month"
        );
        assert_eq!(validate_date(1999, 0, 1).unwrap_err(), "0 is not a valid month");
        assert_eq!(validate_date(1999, 1, 0).unwrap_err(), "0 is not a valid day");
        assert_eq!(
            validate_date(1999, 1, 39).unwrap_err(),
            "39 is not a valid day"
        );
    }
}
