//! TUI application state

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::config::CalcConfig;
use crate::core::{format_number, CalcResult, Engine, Input};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Creates an app whose display size comes from `config`
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self::with_engine(Engine::with_max_len(config.max_len))
    }

    /// Wraps an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// The calculator engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access to the engine
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// The keypad, with the last pressed button highlighted
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key and highlights its button
    pub fn press(&mut self, input: Input) -> CalcResult<()> {
        self.engine.press(input)?;
        self.keypad.highlight(input);
        Ok(())
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) -> CalcResult<()> {
        match action {
            KeyAction::Press(input) => self.press(input),
            KeyAction::Quit => {
                self.quit();
                Ok(())
            }
            KeyAction::None => Ok(()),
        }
    }

    /// Presses the keypad button under a mouse click, if any.
    ///
    /// Returns whether a button was hit.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> CalcResult<bool> {
        let Some(input) = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.input)
        else {
            return Ok(false);
        };
        self.press(input)?;
        Ok(true)
    }

    /// Status lines describing the engine registers
    #[must_use]
    pub fn status(&self) -> Vec<String> {
        if self.engine.is_error() {
            return vec!["✗ Division by zero".into(), "Press a digit to start over".into()];
        }

        let state = self.engine.state();
        let mut status = Vec::new();

        if let Some(op) = state.pending_additive {
            status.push(format!("{} {}", format_number(state.sum_so_far), op.symbol()));
        }
        if let Some(op) = state.pending_multiplicative {
            status.push(format!(
                "{} {}",
                format_number(state.factor_so_far),
                op.symbol()
            ));
        }
        if status.is_empty() {
            status.push("Ready".into());
        }
        status
    }
}
