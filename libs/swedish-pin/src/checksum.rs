//! Luhn control digit over `yymmddnnn`.
//!
//! Century and separator never take part in the checksum, which is why
//! `19850709-9813` and `18850709-9813` are both valid.

/// Computes the Luhn control digit for a sequence of digit values.
///
/// Digits at even positions (0-indexed) are doubled, and products above 9
/// have 9 subtracted. The control digit is the smallest value that brings
/// the total to a multiple of 10.
pub fn luhn<I>(digits: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let sum: u32 = digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let v = u32::from(d) * if i % 2 == 0 { 2 } else { 1 };
            if v > 9 {
                v - 9
            } else {
                v
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Computes the control digit for the given fields.
///
/// `year` is reduced to its last two digits. `encoded_day` is the day as
/// written, so coordination numbers must pass the day with 60 added.
pub fn control_digit(year: i32, month: u32, encoded_day: u32, sequence_number: u16) -> u8 {
    let digits = format!(
        "{:02}{:02}{:02}{:03}",
        year.rem_euclid(100),
        month,
        encoded_day,
        sequence_number
    );
    luhn(digits.bytes().map(|b| b - b'0'))
}
