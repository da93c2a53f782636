//! Sort keys for post dates.

/// A calendar date with optional time of day, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl PostDate {
    /// Parse `YYYY-MM-DD`, optionally followed by `T` or a space and
    /// `HH:MM[:SS]`. Anything after the time (fractions, zone) is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_digits(&bytes[0..4])? as u16;
        let month = parse_digits(&bytes[5..7])? as u8;
        let day = parse_digits(&bytes[8..10])? as u8;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        let (hour, minute, second) = match bytes.get(10) {
            None => (0, 0, 0),
            Some(b'T') | Some(b' ') => parse_time(&bytes[11..])?,
            Some(_) => return None,
        };

        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

fn parse_time(bytes: &[u8]) -> Option<(u8, u8, u8)> {
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }

    let hour = parse_digits(&bytes[0..2])? as u8;
    let minute = parse_digits(&bytes[3..5])? as u8;
    let second = if bytes.len() >= 8 && bytes[5] == b':' {
        parse_digits(&bytes[6..8])? as u8
    } else {
        0
    };

    if hour > 23 || minute > 59 || second > 60 {
        return None;
    }

    Some((hour, minute, second))
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
