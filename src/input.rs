//! Lenient number parsing for raw form input
//!
//! Raw field values are read the way a browser form reads them: leading
//! whitespace is skipped and the longest numeric prefix wins, so `"20cm"`
//! reads as `20`. Anything without a numeric prefix becomes `NaN`, which the
//! solver reports as an invalid number.

/// Parse a raw input string into a number, degrading to `NaN` on failure
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();

    if let Some(value) = parse_infinity(s) {
        return value;
    }

    let len = numeric_prefix_len(s);
    if len == 0 {
        return f64::NAN;
    }
    s[..len].parse().unwrap_or(f64::NAN)
}

fn parse_infinity(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    rest.starts_with("Infinity").then_some(sign * f64::INFINITY)
}

/// Length of the longest prefix matching `[+-]?digits[.digits][(e|E)[+-]?digits]`
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when it has at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("20"), 20.0);
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("-5"), -5.0);
        assert_eq!(parse_number("+3"), 3.0);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_number("  16  "), 16.0);
        assert_eq!(parse_number("\t8\n"), 8.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_number("20cm"), 20.0);
        assert_eq!(parse_number("1.5.5"), 1.5);
        assert_eq!(parse_number("3e"), 3.0);
        assert_eq!(parse_number("2e2x"), 200.0);
    }

    #[test]
    fn test_leading_or_trailing_dot() {
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
    }

    #[test]
    fn test_garbage_is_nan() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("   ").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("cm20").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        // Rust spellings are not accepted as a prefix
        assert!(parse_number("inf").is_nan());
    }
}
