//! Operators and their arithmetic
//!
//! The two operator tiers are separate types so that the engine's pending
//! slots can only ever hold an operator of the right tier.

use crate::core::{CalcError, CalcResult};

/// Low-precedence operators, resolved into the additive accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditiveOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
}

/// High-precedence operators, resolved into the multiplicative accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiplicativeOp {
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

/// Any binary operator the keypad offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+` or `-`
    Additive(AdditiveOp),
    /// `×` or `÷`
    Multiplicative(MultiplicativeOp),
}

impl AdditiveOp {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// `lhs op rhs`
    pub fn evaluate(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        Ok(match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        })
    }
}

impl MultiplicativeOp {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// `lhs op rhs`; dividing by exactly zero is an error
    pub fn evaluate(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl Operator {
    /// Parses a keypad character into an operator.
    ///
    /// Accepts the ASCII spellings (`*`, `x`, `/`) next to the keypad glyphs.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Additive(AdditiveOp::Add)),
            '-' => Some(Self::Additive(AdditiveOp::Subtract)),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiplicative(MultiplicativeOp::Multiply)),
            '/' | '÷' => Some(Self::Multiplicative(MultiplicativeOp::Divide)),
            _ => None,
        }
    }

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Additive(op) => op.symbol(),
            Self::Multiplicative(op) => op.symbol(),
        }
    }

    /// `lhs op rhs`
    pub fn evaluate(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Additive(op) => op.evaluate(lhs, rhs),
            Self::Multiplicative(op) => op.evaluate(lhs, rhs),
        }
    }
}

impl From<AdditiveOp> for Operator {
    fn from(op: AdditiveOp) -> Self {
        Self::Additive(op)
    }
}

impl From<MultiplicativeOp> for Operator {
    fn from(op: MultiplicativeOp) -> Self {
        Self::Multiplicative(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
