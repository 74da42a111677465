//! Unified calculator driver
//!
//! The behavioural checks below are written once against
//! [`CalculatorDriver`] and run against every front end: the bare engine and
//! the TUI app both have to pass the same key sequences.

use crate::core::{parse_keys, CalcResult, DisplayChannel, Engine, Input, ERROR_MARKER};

/// Anything that accepts key presses and shows a display
pub trait CalculatorDriver {
    /// Sends one input
    fn press(&mut self, input: Input) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Returns to the initial state (AC)
    fn reset(&mut self) {
        if let Err(e) = self.press(Input::ClearAll) {
            tracing::warn!(error = %e, "reset rejected");
        }
    }

    /// Sends a key sequence such as `"2 + 3 * 4 ="`
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for input in parse_keys(keys)? {
            self.press(input)?;
        }
        Ok(())
    }
}

impl<D: DisplayChannel> CalculatorDriver for Engine<D> {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        Engine::press(self, input)
    }

    fn display(&self) -> String {
        Engine::display(self).to_string()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, Input};
    use crate::tui::CalculatorApp;

    /// Drives the TUI app without a terminal
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) -> CalcResult<()> {
            self.app.press(input)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

fn expect_display<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.reset();
    if let Err(e) = driver.press_keys(keys) {
        panic!("keys {keys:?} rejected: {e}");
    }
    assert_eq!(driver.display(), expected, "after keys {keys:?}");
}

/// Digits concatenate; a zero on a fresh display is ignored
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "123", "123");
    expect_display(driver, "0", "0");
    expect_display(driver, "007", "7");
}

/// The decimal point appears at most once
pub fn verify_point<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "1.5", "1.5");
    expect_display(driver, "1..5.", "1.5");
    expect_display(driver, ".", "0.");
}

/// Sign flip is an involution and leaves zero alone
pub fn verify_flip_sign<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "8~", "-8");
    expect_display(driver, "8~~", "8");
    expect_display(driver, "~", "0");
}

/// Backspace ends at `"0"`
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "98<", "9");
    expect_display(driver, "98<<<<", "0");
}

/// Basic arithmetic on each operator
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "2+3=", "5");
    expect_display(driver, "10-4=", "6");
    expect_display(driver, "6*7=", "42");
    expect_display(driver, "20/4=", "5");
}

/// Multiplication binds tighter than addition; same-tier chains go left to right
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "2+3*4=", "14");
    expect_display(driver, "2*3+4=", "10");
    expect_display(driver, "10-3-2=", "5");
    expect_display(driver, "8/2/2=", "2");
}

/// Dividing by zero shows the error marker and starts over cleanly
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5/0=", ERROR_MARKER);
    expect_display(driver, "5/0=2+2=", "4");
}

/// `=` does not repeat the last operation
pub fn verify_single_shot_equals<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "4+5=", "9");
    expect_display(driver, "4+5==", "9");
    expect_display(driver, "4+5=1", "1");
}

/// Runs every check above
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_point(driver);
    verify_flip_sign(driver);
    verify_backspace(driver);
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_division_by_zero(driver);
    verify_single_shot_equals(driver);
    driver.reset();
}
