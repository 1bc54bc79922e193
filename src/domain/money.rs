use std::fmt;

/// Money is represented as integer cents so ledger arithmetic stays exact.
/// €50.00 is 5000 cents; balances may legally be negative.
pub type Cents = i64;

/// Render cents as a decimal string: 5000 -> "50.00", -1 -> "-0.01".
pub fn format_cents(cents: Cents) -> String {
    let units = cents / 100;
    let frac = (cents % 100).abs();
    // Truncating division loses the sign when |cents| < 100
    let sign = if cents < 0 && units == 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, units, frac)
}

/// Parse a decimal string into cents: "50.00" -> 5000, "12.5" -> 1250,
/// "-3" -> -300. Negative input is accepted because balance corrections may
/// write negative values. Fractional digits beyond two are dropped.
///
/// Only ASCII digits are accepted on either side of the decimal point, so
/// malformed input (including multi-byte characters) reports
/// [`ParseCentsError::InvalidFormat`] instead of slicing blindly.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_part, frac_part) = match unsigned.split_once('.') {
        Some((units, frac)) => (units, Some(frac)),
        None => (unsigned, None),
    };

    // "50" and ".50" are fine, "" and "-" are not
    if units_part.is_empty() && frac_part.is_none() {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_part.is_empty() {
        0
    } else {
        parse_digit_run(units_part)?
    };

    let frac_cents: i64 = match frac_part {
        None => 0,
        Some(frac) => {
            // A second '.' lands in here and fails the digit check too
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseCentsError::InvalidFormat);
            }
            let mut digits = frac.chars().map(|c| (c as i64) - ('0' as i64));
            let tens = digits.next().unwrap_or(0);
            let ones = digits.next().unwrap_or(0);
            tens * 10 + ones
        }
    };

    let cents = units * 100 + frac_cents;
    Ok(if negative { -cents } else { cents })
}

fn parse_digit_run(s: &str) -> Result<i64, ParseCentsError> {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }
    s.parse().map_err(|_| ParseCentsError::InvalidFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-150), "-1.50");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_cents_negative() {
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("-0.01"), Ok(-1));
        assert_eq!(parse_cents("-999"), Ok(-99900));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents("-").is_err());
        assert!(parse_cents("1.2a").is_err());
    }

    #[test]
    fn test_parse_cents_rejects_multibyte_input() {
        // Non-ASCII anywhere in the number is a format error, never a panic
        assert_eq!(parse_cents("1.€5"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("€50"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("5.0€00"), Err(ParseCentsError::InvalidFormat));
    }
}
