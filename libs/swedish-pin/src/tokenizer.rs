//! Splits raw input into the structural fields of a personnummer.
//!
//! Grammar, after trimming surrounding whitespace:
//!
//! ```text
//! [century(2)] year(2) month(2) day(2) [separator] sequence(3) control(1)
//! ```
//!
//! where the separator is one of `+`, `-` or a single space. Nothing else is
//! permitted anywhere in the string.

/// The character between the date and the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `-`, used for people younger than 100.
    Minus,
    /// `+`, used from the year a person turns 100.
    Plus,
    /// A single space; treated like `-`.
    Space,
}

impl Separator {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'-' => Some(Separator::Minus),
            b'+' => Some(Separator::Plus),
            b' ' => Some(Separator::Space),
            _ => None,
        }
    }

    /// The character this separator is written as.
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Minus => '-',
            Separator::Plus => '+',
            Separator::Space => ' ',
        }
    }
}

/// Raw digit groups of a successfully matched input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub century: Option<&'a str>,
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub separator: Option<Separator>,
    pub sequence: &'a str,
    pub control: &'a str,
}

impl<'a> Tokens<'a> {
    /// The nine digits covered by the checksum, `yymmddnnn`, as digit values.
    pub fn checksum_digits(&self) -> impl Iterator<Item = u8> + 'a {
        [self.year, self.month, self.day, self.sequence]
            .into_iter()
            .flat_map(|group| group.bytes().map(|b| b - b'0'))
    }
}

/// ASCII whitespace (including vertical tab) and NUL. Unicode spaces such as
/// NBSP are not padding and make the input malformed.
fn is_padding(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b' || c == '\0'
}

/// Matches `input` against the grammar, returning `None` on any mismatch.
pub fn tokenize(input: &str) -> Option<Tokens<'_>> {
    let s = input.trim_matches(is_padding);

    // Everything must be ASCII for byte slicing below to be on char boundaries.
    if !s.is_ascii() {
        return None;
    }

    let (century, rest) = match s.len() {
        10 | 11 => (None, s),
        12 | 13 => {
            let (century, rest) = s.split_at(2);
            (Some(century), rest)
        }
        _ => return None,
    };

    let (date, separator, tail) = match rest.len() {
        10 => (&rest[..6], None, &rest[6..]),
        11 => (
            &rest[..6],
            Some(Separator::from_byte(rest.as_bytes()[6])?),
            &rest[7..],
        ),
        _ => return None,
    };

    if !all_digits(date) || !all_digits(tail) || !century.map_or(true, all_digits) {
        return None;
    }

    Some(Tokens {
        century,
        year: &date[0..2],
        month: &date[2..4],
        day: &date[4..6],
        separator,
        sequence: &tail[0..3],
        control: &tail[3..4],
    })
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits() {
        let t = tokenize("8507099805").unwrap();
        assert_eq!(t.century, None);
        assert_eq!((t.year, t.month, t.day), ("85", "07", "09"));
        assert_eq!(t.separator, None);
        assert_eq!((t.sequence, t.control), ("980", "5"));
    }

    #[test]
    fn test_twelve_digits_with_separator() {
        let t = tokenize("19850709-9805").unwrap();
        assert_eq!(t.century, Some("19"));
        assert_eq!(t.year, "85");
        assert_eq!(t.separator, Some(Separator::Minus));
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            tokenize("850709+9805").unwrap().separator,
            Some(Separator::Plus)
        );
        assert_eq!(
            tokenize("850709 9805").unwrap().separator,
            Some(Separator::Space)
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        let t = tokenize("  198507099805\n").unwrap();
        assert_eq!(t.century, Some("19"));

        let t = tokenize("\t\x0b8507099805\r\0").unwrap();
        assert_eq!(t.century, None);
        assert_eq!(t.control, "5");
    }

    #[test]
    fn test_rejects_malformed() {
        for input in [
            "",
            "Just a string",
            "17850709=9813",
            "850709-981",
            "850709981",
            "10850709981",
            "85070999805",
            "8507-099805",
            "1985070998055",
            "198507099805x",
            "1985070998050",
            "85070\u{e5}9805",
            "850709--9805",
            "\u{a0}8507099805\u{3000}",
            "8507099805\u{2003}",
        ] {
            assert!(tokenize(input).is_none(), "{input:?} should not match");
        }
    }

    #[test]
    fn test_checksum_digits() {
        let t = tokenize("19850709-9805").unwrap();
        let digits: Vec<u8> = t.checksum_digits().collect();
        assert_eq!(digits, vec![8, 5, 0, 7, 0, 9, 9, 8, 0]);
    }
}
