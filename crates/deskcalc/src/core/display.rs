//! The display channel
//!
//! The engine never keeps a typed operand buffer: it re-reads the number from
//! the display text on every operator, so the display is the only place the
//! operand being entered lives.

/// Default display capacity in characters
pub const DEFAULT_MAX_LEN: usize = 15;

/// Significant digits used when writing a result to the display
pub const SIGNIFICANT_DIGITS: usize = 6;

/// A read/write text field the engine reports to
pub trait DisplayChannel {
    /// Current display text
    fn text(&self) -> &str;

    /// Replaces the display text
    fn set_text(&mut self, text: &str);

    /// Empties the display
    fn clear(&mut self) {
        self.set_text("");
    }

    /// The displayed text as a number (see [`parse_operand`])
    fn value(&self) -> f64 {
        parse_operand(self.text())
    }
}

/// Single-line display with a fixed character capacity.
///
/// Text longer than the capacity is cut to its first `max_len` characters,
/// which is how extra digits get dropped once the field is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDisplay {
    text: String,
    max_len: usize,
}

impl Default for LineDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}

impl LineDisplay {
    /// Creates a display showing `"0"`
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        let mut display = Self {
            text: String::new(),
            max_len,
        };
        display.set_text("0");
        display
    }

    /// Character capacity
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }
}

impl DisplayChannel for LineDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_len).collect();
    }
}

/// Parses display text as an operand.
///
/// Anything that is not a number (the error marker, a lone `-`) reads as 0.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Formats a value for the display, `%g` style with six significant digits.
///
/// ```
/// use deskcalc::core::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(1_234_567.0), "1.23457e+06");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format_significant(value, SIGNIFICANT_DIGITS)
}

fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.into();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits decides the exponent, so let the
    // scientific formatter do it and read the exponent back.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== LineDisplay =====

    #[test]
    fn test_new_display_shows_zero() {
        let display = LineDisplay::default();
        assert_eq!(display.text(), "0");
        assert_eq!(display.max_len(), DEFAULT_MAX_LEN);
    }

    #[test]
    fn test_set_text_truncates_to_capacity() {
        let mut display = LineDisplay::new(4);
        display.set_text("123456");
        assert_eq!(display.text(), "1234");
    }

    #[test]
    fn test_set_text_counts_chars_not_bytes() {
        let mut display = LineDisplay::new(3);
        display.set_text("÷÷÷÷");
        assert_eq!(display.text(), "÷÷÷");
    }

    #[test]
    fn test_clear() {
        let mut display = LineDisplay::default();
        display.set_text("42");
        display.clear();
        assert_eq!(display.text(), "");
    }

    #[test]
    fn test_value() {
        let mut display = LineDisplay::default();
        display.set_text("-2.5");
        assert_eq!(display.value(), -2.5);
    }

    // ===== parse_operand =====

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("0"), 0.0);
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("-7"), -7.0);
        assert_eq!(parse_operand("0.25"), 0.25);
    }

    #[test]
    fn test_parse_trailing_point() {
        assert_eq!(parse_operand("5."), 5.0);
    }

    #[test]
    fn test_parse_leading_zero() {
        assert_eq!(parse_operand("05"), 5.0);
    }

    #[test]
    fn test_parse_exponent_form() {
        assert_eq!(parse_operand("1.23457e+06"), 1_234_570.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_operand("####"), 0.0);
        assert_eq!(parse_operand("-"), 0.0);
        assert_eq!(parse_operand(""), 0.0);
    }

    // ===== format_number =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(999_999.0), "999999");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "-0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_large_values_use_exponent() {
        assert_eq!(format_number(1_000_000.0), "1e+06");
        assert_eq!(format_number(1_234_567.0), "1.23457e+06");
        assert_eq!(format_number(-2.5e20), "-2.5e+20");
        assert_eq!(format_number(1e100), "1e+100");
    }

    #[test]
    fn test_format_small_values_use_exponent() {
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
    }

    #[test]
    fn test_format_rounding_bumps_exponent() {
        assert_eq!(format_number(999_999.7), "1e+06");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }
}
