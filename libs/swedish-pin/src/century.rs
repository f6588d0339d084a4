//! Century guessing for numbers written without an explicit century.
//!
//! A PIN such as `201231-...` could belong to 1820, 1920, 2020 and so on.
//! The guess is the most recent year whose birth date is not in the future,
//! moved one further century back when the `+` separator is used.
//!
//! For example, on 2010-10-10:
//!
//! ```text
//! 100101-nnnn => 2010
//! 111111-nnnn => 1911   (2011-11-11 has not happened yet)
//! 111111+nnnn => 1811   (1911 - 100)
//! 090909+nnnn => 1909   (2009 - 100)
//! ```

use chrono::Datelike;

use crate::tokenizer::Separator;

/// Resolves a two-digit `year` to a full year relative to `now`.
///
/// `month` and `day` are the real birth month and day (coordination offset
/// removed). They only need to be ordered, not calendar-valid.
pub fn resolve_year<T: Datelike>(
    year: u32,
    month: u32,
    day: u32,
    separator: Option<Separator>,
    now: &T,
) -> i32 {
    let mut guessed = now.year().div_euclid(100) * 100 + year as i32;

    // Nobody is born in the future; skip back a century when that happens.
    if (guessed, month, day) > (now.year(), now.month(), now.day()) {
        guessed -= 100;
    }

    // Applied regardless of the step above.
    if separator == Some(Separator::Plus) {
        guessed -= 100;
    }

    tracing::trace!(year, month, day, guessed, "resolved century");

    guessed
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 10, 10).unwrap()
    }

    #[rstest]
    #[case(12, 12, 12, None, 1912)]
    #[case(10, 10, 11, None, 1910)]
    #[case(9, 9, 9, None, 2009)]
    #[case(89, 9, 9, None, 1989)]
    #[case(10, 10, 10, None, 2010)]
    #[case(11, 11, 11, Some(Separator::Minus), 1911)]
    #[case(11, 11, 11, Some(Separator::Space), 1911)]
    #[case(11, 11, 11, Some(Separator::Plus), 1811)]
    #[case(10, 1, 1, Some(Separator::Plus), 1910)]
    #[case(9, 9, 9, Some(Separator::Plus), 1909)]
    fn test_resolve_year(
        #[case] year: u32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] separator: Option<Separator>,
        #[case] expected: i32,
    ) {
        assert_eq!(
            resolve_year(year, month, day, separator, &reference()),
            expected
        );
    }

    #[test]
    fn test_accepts_datetimes() {
        let now = chrono::DateTime::parse_from_rfc3339("2010-10-10T23:59:59Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(resolve_year(10, 10, 10, None, &now), 2010);
        assert_eq!(resolve_year(10, 10, 11, None, &now), 1910);
    }

    #[test]
    fn test_impossible_day_still_orders() {
        // February 30th sorts after any real February date.
        let now = NaiveDate::from_ymd_opt(2010, 2, 28).unwrap();
        assert_eq!(resolve_year(10, 2, 30, None, &now), 1910);
    }
}
