//! deskcalc - keypad calculator engine with a terminal front end
//!
//! The engine takes one button press at a time and keeps two pending
//! operator slots, so `×`/`÷` bind tighter than `+`/`-` without an
//! expression parser. The display text is the operand: every operator
//! re-reads the number from it.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_keys("2 + 3 × 4 =").unwrap();
//! assert_eq!(engine.display(), "14");
//!
//! // Dividing by zero aborts the calculation
//! engine.press_keys("5 ÷ 0 =").unwrap();
//! assert_eq!(engine.display(), ERROR_MARKER);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, LogLevel};
    pub use crate::core::{
        parse_keys, AdditiveOp, CalcError, CalcResult, DisplayChannel, Engine, EngineState,
        Input, LineDisplay, MultiplicativeOp, Operator, ERROR_MARKER,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.press_keys("2+3=").unwrap();
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn test_precedence_through_prelude() {
        let mut engine = Engine::new();
        engine.press_keys("2 + 3 × 4 =").unwrap();
        assert_eq!(engine.display(), "14");
    }

    #[test]
    fn test_custom_display_channel() {
        #[derive(Debug, Default)]
        struct Recorder {
            text: String,
            writes: Vec<String>,
        }

        impl DisplayChannel for Recorder {
            fn text(&self) -> &str {
                &self.text
            }

            fn set_text(&mut self, text: &str) {
                self.text = text.to_string();
                self.writes.push(text.to_string());
            }
        }

        let mut engine = Engine::with_display(Recorder::default());
        engine.press_keys("6÷3=").unwrap();
        assert_eq!(engine.display(), "2");
        assert_eq!(
            engine.display_channel().writes,
            vec!["0", "", "6", "", "3", "2"]
        );
    }
}
