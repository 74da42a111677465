//! Calculator core: operators, display channel, input events and the engine
//!
//! Everything in here is front-end agnostic. The TUI and the `eval` command
//! both drive the same [`Engine`] through [`Input`] events.

pub mod display;
pub mod engine;
pub mod input;
mod operations;

pub use display::{format_number, parse_operand, DisplayChannel, LineDisplay};
pub use engine::{Engine, EngineState};
pub use input::{parse_keys, Input};
pub use operations::{AdditiveOp, MultiplicativeOp, Operator};

use thiserror::Error;

/// Text shown on the display after an aborted calculation
pub const ERROR_MARKER: &str = "####";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// A key sequence contained a character with no keypad meaning
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    /// Digit input outside 0..=9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (terminal setup, config or log files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
