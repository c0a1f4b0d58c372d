//! Lenient integer parsing for free-text input

/// Read the integer at the start of `input`
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of digits; a `0x`/`0X` prefix switches to hexadecimal. Anything after the
/// digits is ignored, so `"12abc"` and `"3.7"` read as 12 and 3. Values too
/// large for an `i64` saturate. Returns `None` when there are no digits.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut magnitude: Option<i64> = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        let value = magnitude.unwrap_or(0);
        magnitude = Some(
            value
                .checked_mul(i64::from(radix))
                .and_then(|v| v.checked_add(i64::from(digit)))
                .unwrap_or(i64::MAX),
        );
    }

    magnitude.map(|m| if negative { -m } else { m })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_numbers() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.7"), Some(3));
        assert_eq!(parse_leading_int("10 seconds"), Some(10));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(" - 4"), None);
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
    }

    #[test]
    fn reads_hex_prefix() {
        assert_eq!(parse_leading_int("0x5"), Some(5));
        assert_eq!(parse_leading_int("0X1f"), Some(31));
        assert_eq!(parse_leading_int("-0x10"), Some(-16));
        assert_eq!(parse_leading_int("0x1fzz"), Some(31));
    }

    #[test]
    fn large_values_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));
    }
}
