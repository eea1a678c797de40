//! Conversion between numbers and display text.
//!
//! Numbers are rendered with the shortest decimal text that round-trips,
//! switching to exponent notation outside `[1e-7, 1e21)` in magnitude.

/// Display text for any non-finite result.
pub const ERROR_TEXT: &str = "Error";

/// Format a result for display.
///
/// Non-finite values become [`ERROR_TEXT`]. Exponent notation is passed
/// through as is; otherwise trailing fractional zeros and a bare trailing
/// `.` are stripped.
///
/// # Example
///
/// ```rust
/// use keycalc::core::format_number;
///
/// assert_eq!(format_number(6.5), "6.5");
/// assert_eq!(format_number(1.0 / 4.0 * 4.0), "1");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Error");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let text = shortest_decimal(n);
    if text.contains('e') {
        text
    } else if text.contains('.') {
        trim_fraction(&text).to_string()
    } else {
        text
    }
}

/// Parse entry text as typed on the keypad.
///
/// Empty text counts as zero. Text that is not a number (a lone `-` left
/// after deleting digits, for instance) is NaN.
pub fn parse_entry(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn trim_fraction(text: &str) -> &str {
    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

fn shortest_decimal(n: f64) -> String {
    // Covers negative zero as well.
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exp = point - 1;
        let sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exp.abs())
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
