//! Character-by-character scanner for duration strings.

use std::mem;

use crate::error::ParseError;
use crate::unit::{lookup_unit, normalize_unit};

/// Scan state for a single parse call: the number and unit buffers plus
/// the running nanosecond total.
#[derive(Default)]
struct Scanner {
    number: String,
    unit: String,
    total: f64,
}

impl Scanner {
    /// Consume one character, flushing the pending token when a digit
    /// follows a completed unit.
    fn step(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            '0'..='9' | '.' => {
                if !self.unit.is_empty() {
                    self.flush()?;
                }
                self.number.push(c);
                Ok(())
            }
            'a'..='z' | 'µ' => {
                self.unit.push(c);
                Ok(())
            }
            _ => Err(ParseError::InvalidCharacter(c)),
        }
    }

    /// Finalize the accumulated number/unit pair into the total and reset
    /// both buffers.
    fn flush(&mut self) -> Result<(), ParseError> {
        let value: f64 = self.number.parse().map_err(|_| ParseError::InvalidFormat)?;
        let multiplier = match lookup_unit(normalize_unit(&self.unit)) {
            Some(nanos) => nanos,
            None => return Err(ParseError::UnknownUnit(mem::take(&mut self.unit))),
        };
        self.total += value * multiplier as f64;
        self.number.clear();
        self.unit.clear();
        Ok(())
    }
}

/// Parse a duration string like `"1h30m"`, `"100ms"`, or `"2.5s"` into a
/// total nanosecond count.
///
/// The scan is a single left-to-right pass with no backtracking: digits
/// and `.` accumulate a number, lowercase letters and `µ` accumulate a
/// unit, and a digit arriving after a completed unit flushes the pending
/// token. Any other character fails the parse immediately.
pub fn parse_duration_string(input: &str) -> Result<i64, ParseError> {
    let mut scanner = Scanner::default();
    for c in input.chars() {
        scanner.step(c)?;
    }

    // A trailing token is flushed here; anything else left over means the
    // string ended mid-token (or was empty).
    if scanner.number.is_empty() || scanner.unit.is_empty() {
        return Err(ParseError::InvalidFormat);
    }
    scanner.flush()?;

    Ok(scanner.total as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_string() {
        assert_eq!(parse_duration_string("1s"), Ok(1_000_000_000));
        assert_eq!(parse_duration_string("100ms"), Ok(100_000_000));
        assert_eq!(parse_duration_string("1h30m"), Ok(5_400_000_000_000));
        assert_eq!(parse_duration_string("2.5s"), Ok(2_500_000_000));
    }

    #[test]
    fn test_flush_on_digit_after_unit() {
        // Same unit may repeat; each token is flushed when the next digit
        // arrives.
        assert_eq!(parse_duration_string("30sec30sec"), Ok(60_000_000_000));
    }

    #[test]
    fn test_invalid_character_short_circuits() {
        assert_eq!(
            parse_duration_string("1h 30m"),
            Err(ParseError::InvalidCharacter(' '))
        );
        assert_eq!(
            parse_duration_string("1H"),
            Err(ParseError::InvalidCharacter('H'))
        );
    }

    #[test]
    fn test_numberless_token() {
        assert_eq!(parse_duration_string("s5s"), Err(ParseError::InvalidFormat));
        assert_eq!(parse_duration_string("h"), Err(ParseError::InvalidFormat));
        assert_eq!(
            parse_duration_string("1..5h"),
            Err(ParseError::InvalidFormat)
        );
    }
}
