//! Parsing and validation entry points.

use chrono::{Datelike, Local};

use crate::century::resolve_year;
use crate::checksum::luhn;
use crate::date::{decode_day, validate_date};
use crate::error::PinError;
use crate::personnummer::Personnummer;
use crate::tokenizer::{tokenize, Tokens};

/// Parses a personnummer relative to today's local date.
///
/// See [`parse_at`].
pub fn parse(input: &str) -> Result<Personnummer, PinError> {
    parse_at(input, Local::now().date_naive())
}

/// Parses a personnummer, resolving a missing century relative to `now`.
///
/// The PIN `201231-...` could be in 1820, 1920, 2020 and so on. The guess is
/// the most recent year that is not in the future, so during 2020 it is
/// 2020 and during 2019 it is 1920. A `+` separator moves it another
/// century back.
///
/// # Errors
///
/// Checks run in order and the first failure is returned:
/// - [`PinError::InvalidFormat`] if the input does not match the grammar.
/// - [`PinError::InvalidChecksum`] if the control digit is wrong.
/// - [`PinError::InvalidDate`] if the date is not a calendar date.
pub fn parse_at<T: Datelike>(input: &str, now: T) -> Result<Personnummer, PinError> {
    let result = parse_tokens(input, &now);
    if let Err(err) = &result {
        // The input itself is personal data and stays out of the logs.
        tracing::debug!(kind = ?err.kind(), "rejected personnummer");
    }
    result
}

/// Returns true if `input` parses relative to today's local date.
pub fn valid(input: &str) -> bool {
    parse(input).is_ok()
}

/// Returns true if `input` parses relative to `now`.
pub fn valid_at<T: Datelike>(input: &str, now: T) -> bool {
    parse_at(input, now).is_ok()
}

fn parse_tokens<T: Datelike>(input: &str, now: &T) -> Result<Personnummer, PinError> {
    let tokens = tokenize(input).ok_or_else(|| PinError::invalid_format(input))?;

    let control_digit = number(tokens.control) as u8;
    if luhn(tokens.checksum_digits()) != control_digit {
        return Err(PinError::invalid_checksum(input));
    }

    let month = number(tokens.month);
    let (day, coordination_number) = decode_day(number(tokens.day));
    let year = full_year(&tokens, month, day, now);

    let birthday =
        validate_date(year, month, day).map_err(|reason| PinError::invalid_date(input, reason))?;

    Ok(Personnummer::new(
        birthday,
        coordination_number,
        number(tokens.sequence) as u16,
        control_digit,
    ))
}

fn full_year<T: Datelike>(tokens: &Tokens<'_>, month: u32, day: u32, now: &T) -> i32 {
    let year = number(tokens.year);
    match tokens.century {
        Some(century) => (number(century) * 100 + year) as i32,
        None => resolve_year(year, month, day, tokens.separator, now),
    }
}

/// Decodes a digit group already checked by the tokenizer.
fn number(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;
    use crate::error::ParseErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDate {
        date(2020, 6, 1)
    }

    #[test]
    fn test_valid_12_digit() {
        let pin = parse_at("198507099805", now()).unwrap();
        assert!(!pin.is_coordination_number());
        assert_eq!(pin.year(), 1985);
        assert_eq!(pin.month(), 7);
        assert_eq!(pin.day(), 9);
        assert_eq!(pin.birthday(), date(1985, 7, 9));
        assert_eq!(pin.sequence_number(), 980);
        assert_eq!(pin.control_digit(), 5);
        assert_eq!(pin.format_short(now()), "850709-9805");
        assert_eq!(pin.format_long(), "19850709-9805");
    }

    #[test]
    fn test_valid_12_digit_coordination_number() {
        let pin = parse_at("198507699802", now()).unwrap();
        assert!(pin.is_coordination_number());
        assert_eq!(pin.year(), 1985);
        assert_eq!(pin.day(), 9);
        assert_eq!(pin.birthday(), date(1985, 7, 9));
        assert_eq!(pin.sequence_number(), 980);
        assert_eq!(pin.control_digit(), 2);
        assert_eq!(pin.format_short(now()), "850769-9802");
        assert_eq!(pin.format_long(), "19850769-9802");
    }

    #[test]
    fn test_valid_10_digit() {
        let pin = parse_at("8507099805", now()).unwrap();
        assert_eq!(pin.year(), 1985);
        assert_eq!(pin.format_long(), "19850709-9805");

        let pin = parse_at("8507699802", now()).unwrap();
        assert!(pin.is_coordination_number());
        assert_eq!(pin.format_short(now()), "850769-9802");
    }

    #[test]
    fn test_valid_10_digit_with_century_indicator() {
        let pin = parse_at("850709+9805", now()).unwrap();
        assert_eq!(pin.year(), 1885);
        assert_eq!(pin.birthday(), date(1885, 7, 9));
        assert_eq!(pin.format_short(now()), "850709+9805");
        assert_eq!(pin.format_long(), "18850709-9805");
    }

    #[rstest]
    #[case("121212-2442", 1912)]
    #[case("101011-5283", 1910)]
    #[case("090909-9640", 2009)]
    #[case("890909-7761", 1989)]
    #[case("101010-3289", 2010)]
    #[case("111111-4425", 1911)]
    #[case("111111+4425", 1811)]
    #[case("100101+7969", 1910)]
    #[case("090909+9640", 1909)]
    fn test_century_guessing(#[case] input: &str, #[case] year: i32) {
        let now = date(2010, 10, 10);
        assert_eq!(parse_at(input, now).unwrap().year(), year);
    }

    #[test]
    fn test_plus_applies_after_future_check() {
        // Rendered with `+` all through 2020, but the 2020-08-01 guess is in
        // the future, so both steps apply.
        let now = date(2020, 6, 15);
        let pin = Personnummer::from_parts(date(1920, 8, 1), 1);
        let short = pin.format_short(now);
        assert!(short.contains('+'));
        assert_eq!(parse_at(&short, now).unwrap().year(), 1820);
    }

    #[test]
    fn test_validation_of_control_digits() {
        assert!(valid_at("198507099805", now()));
        assert!(!valid_at("198507099804", now()));
        assert!(!valid_at("198507099806", now()));

        assert!(valid_at("198507099813", now()));
        assert!(!valid_at("198507099812", now()));
        assert!(!valid_at("198507099814", now()));

        // Separator does not matter
        assert!(valid_at("850709-9813", now()));
        assert!(valid_at("850709+9813", now()));
        assert!(!valid_at("850709-9812", now()));

        // Century does not matter
        assert!(valid_at("19850709-9813", now()));
        assert!(valid_at("18850709-9813", now()));
        assert!(valid_at("17850709-9813", now()));

        // Missing the control digit
        assert!(!valid_at("850709-981", now()));
        assert!(!valid_at("850709981", now()));
        assert!(!valid_at("10850709981", now()));
    }

    #[test]
    fn test_only_the_last_digit_is_accepted() {
        for digit in 0..10u8 {
            let input = format!("19850709980{digit}");
            assert_eq!(valid_at(&input, now()), digit == 5, "{input}");
        }
    }

    #[rstest]
    #[case("17850709=9813", ParseErrorKind::InvalidFormat)]
    #[case("Just a string", ParseErrorKind::InvalidFormat)]
    #[case("", ParseErrorKind::InvalidFormat)]
    #[case("\u{a0}8507099805\u{3000}", ParseErrorKind::InvalidFormat)]
    #[case("112233-4455", ParseErrorKind::Checksum)]
    #[case("19112233-4455", ParseErrorKind::Checksum)]
    #[case("20112233-4455", ParseErrorKind::Checksum)]
    #[case("199909193776", ParseErrorKind::Checksum)]
    #[case("108507099818", ParseErrorKind::Checksum)]
    #[case("198507099806", ParseErrorKind::Checksum)]
    #[case("850709-9814", ParseErrorKind::Checksum)]
    #[case("9999999999", ParseErrorKind::InvalidDate)]
    #[case("199999999999", ParseErrorKind::InvalidDate)]
    fn test_error_kinds(#[case] input: &str, #[case] kind: ParseErrorKind) {
        let err = parse_at(input, now()).unwrap_err();
        assert_eq!(err.kind(), Some(kind));
        assert_eq!(err.input(), Some(input));
        assert!(!valid_at(input, now()));
    }

    #[test]
    fn test_leap_days() {
        // 2000-02-29 exists, 1900-02-29 does not.
        let leap = crate::checksum::control_digit(2000, 2, 29, 123);
        assert!(valid_at(&format!("20000229-123{leap}"), now()));

        let not_leap = crate::checksum::control_digit(1900, 2, 29, 123);
        let err = parse_at(&format!("19000229-123{not_leap}"), now()).unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_error_keeps_untrimmed_input() {
        let err = parse_at(" 850709-9814 ", now()).unwrap_err();
        assert_eq!(err.input(), Some(" 850709-9814 "));
    }
}
