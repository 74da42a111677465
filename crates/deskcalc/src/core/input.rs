//! Input events and key sequences

use crate::core::{AdditiveOp, CalcError, CalcResult, MultiplicativeOp, Operator};

/// One button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Digit key (0-9)
    Digit(u8),
    /// Decimal point
    Point,
    /// Sign flip (±)
    FlipSign,
    /// Drop the last entered character
    Backspace,
    /// Clear the number being entered (C)
    Clear,
    /// Reset the whole calculation (AC)
    ClearAll,
    /// `+` or `-`
    Additive(AdditiveOp),
    /// `×` or `÷`
    Multiplicative(MultiplicativeOp),
    /// Equals
    Equals,
}

impl Input {
    /// Maps a key character to an input.
    ///
    /// Letters are case-insensitive: `c` clear, `a` clear-all, `n` flip sign,
    /// `b` backspace, `x` multiply.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(op.into());
        }
        match c.to_ascii_lowercase() {
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            '~' | '±' | 'n' => Some(Self::FlipSign),
            '<' | '←' | 'b' => Some(Self::Backspace),
            'c' => Some(Self::Clear),
            'a' => Some(Self::ClearAll),
            _ => None,
        }
    }

    /// Keypad label for this input
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".into(),
            Self::FlipSign => "±".into(),
            Self::Backspace => "←".into(),
            Self::Clear => "C".into(),
            Self::ClearAll => "AC".into(),
            Self::Additive(op) => op.symbol().into(),
            Self::Multiplicative(op) => op.symbol().into(),
            Self::Equals => "=".into(),
        }
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Additive(op) => Self::Additive(op),
            Operator::Multiplicative(op) => Self::Multiplicative(op),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a key sequence such as `"2 + 3 * 4 ="` into inputs.
///
/// Whitespace is skipped. The first character with no key meaning is an
/// error, and nothing is returned for the rest of the sequence.
pub fn parse_keys(keys: &str) -> CalcResult<Vec<Input>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Input::from_char(c).ok_or(CalcError::UnknownKey(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Input::from_char(c), Some(Input::Digit(d)));
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(Input::from_char('+'), Some(Input::Additive(AdditiveOp::Add)));
        assert_eq!(
            Input::from_char('-'),
            Some(Input::Additive(AdditiveOp::Subtract))
        );
        assert_eq!(
            Input::from_char('×'),
            Some(Input::Multiplicative(MultiplicativeOp::Multiply))
        );
        assert_eq!(
            Input::from_char('/'),
            Some(Input::Multiplicative(MultiplicativeOp::Divide))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Input::from_char('.'), Some(Input::Point));
        assert_eq!(Input::from_char('='), Some(Input::Equals));
        assert_eq!(Input::from_char('~'), Some(Input::FlipSign));
        assert_eq!(Input::from_char('±'), Some(Input::FlipSign));
        assert_eq!(Input::from_char('<'), Some(Input::Backspace));
        assert_eq!(Input::from_char('C'), Some(Input::Clear));
        assert_eq!(Input::from_char('c'), Some(Input::Clear));
        assert_eq!(Input::from_char('A'), Some(Input::ClearAll));
        assert_eq!(Input::from_char('N'), Some(Input::FlipSign));
    }

    #[test]
    fn test_unknown_keys() {
        for c in ['(', ')', '^', '%', 'q', '?'] {
            assert_eq!(Input::from_char(c), None, "{c} should not map");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Input::Digit(7).label(), "7");
        assert_eq!(Input::ClearAll.label(), "AC");
        assert_eq!(Input::Multiplicative(MultiplicativeOp::Divide).label(), "÷");
        assert_eq!(Input::Equals.to_string(), "=");
    }

    #[test]
    fn test_label_round_trips_through_from_char() {
        let inputs = [
            Input::Digit(3),
            Input::Point,
            Input::FlipSign,
            Input::Backspace,
            Input::Clear,
            Input::Equals,
            Input::Additive(AdditiveOp::Subtract),
            Input::Multiplicative(MultiplicativeOp::Multiply),
        ];
        for input in inputs {
            let c = input.label().chars().next().unwrap();
            assert_eq!(Input::from_char(c), Some(input));
        }
    }

    #[test]
    fn test_parse_keys() {
        let keys = parse_keys("12 + 3x4 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Input::Digit(1),
                Input::Digit(2),
                Input::Additive(AdditiveOp::Add),
                Input::Digit(3),
                Input::Multiplicative(MultiplicativeOp::Multiply),
                Input::Digit(4),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_empty() {
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keys_unknown() {
        assert!(matches!(
            parse_keys("2 ^ 3"),
            Err(CalcError::UnknownKey('^'))
        ));
    }
}
