//! Calculator engine
//!
//! An accumulator machine with two pending-operator slots. A pending `×`/`÷`
//! is always resolved before a pending `+`/`-`, which is all the precedence
//! a left-to-right keypad needs:
//!
//! ```text
//! 2 + 3 × 4 =
//!     sum = 2, add pending
//!             factor = 3, mul pending
//!                   = : factor = 12, sum = 2 + 12 = 14
//! ```
//!
//! Dividing by zero aborts: every accumulator and slot is reset and the
//! display shows [`ERROR_MARKER`].

use crate::core::{
    format_number, parse_operand, AdditiveOp, CalcError, CalcResult, DisplayChannel, Input,
    LineDisplay, MultiplicativeOp, Operator, ERROR_MARKER,
};

/// The engine's internal registers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    /// Running total for the `+`/`-` chain
    pub sum_so_far: f64,
    /// Running product for the `×`/`÷` chain
    pub factor_so_far: f64,
    /// Additive operator waiting for its right operand
    pub pending_additive: Option<AdditiveOp>,
    /// Multiplicative operator waiting for its right operand
    pub pending_multiplicative: Option<MultiplicativeOp>,
    /// True when the next digit starts a new number
    pub waiting_for_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            sum_so_far: 0.0,
            factor_so_far: 0.0,
            pending_additive: None,
            pending_multiplicative: None,
            waiting_for_operand: true,
        }
    }
}

impl EngineState {
    /// Folds `right_operand` into the accumulator of `op`'s tier.
    ///
    /// On error the accumulator is left untouched.
    pub fn apply(&mut self, right_operand: f64, op: Operator) -> CalcResult<()> {
        match op {
            Operator::Additive(op) => {
                self.sum_so_far = op.evaluate(self.sum_so_far, right_operand)?;
            }
            Operator::Multiplicative(op) => {
                self.factor_so_far = op.evaluate(self.factor_so_far, right_operand)?;
            }
        }
        Ok(())
    }
}

/// Keypad calculator engine driving a display
#[derive(Debug, Clone)]
pub struct Engine<D = LineDisplay> {
    state: EngineState,
    display: D,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with a default 15-character display
    #[must_use]
    pub fn new() -> Self {
        Self::with_display(LineDisplay::default())
    }

    /// Creates an engine whose display holds `max_len` characters
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self::with_display(LineDisplay::new(max_len))
    }
}

impl<D: DisplayChannel> Engine<D> {
    /// Creates an engine reporting to `display`, which is reset to `"0"`
    pub fn with_display(mut display: D) -> Self {
        display.set_text("0");
        Self {
            state: EngineState::default(),
            display,
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        self.display.text()
    }

    /// The display channel itself
    pub fn display_channel(&self) -> &D {
        &self.display
    }

    /// Internal registers
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns true if the display shows the error marker
    pub fn is_error(&self) -> bool {
        self.display.text() == ERROR_MARKER
    }

    /// Handles one button press.
    ///
    /// Arithmetic failures never surface here: they abort the calculation and
    /// show up on the display. Only a malformed input is an error.
    pub fn press(&mut self, input: Input) -> CalcResult<()> {
        match input {
            Input::Digit(d) => self.digit(d)?,
            Input::Point => self.point(),
            Input::FlipSign => self.flip_sign(),
            Input::Backspace => self.backspace(),
            Input::Clear => self.clear(),
            Input::ClearAll => self.clear_all(),
            Input::Additive(op) => self.additive_op(op),
            Input::Multiplicative(op) => self.multiplicative_op(op),
            Input::Equals => self.equals(),
        }
        tracing::trace!(%input, display = self.display.text(), "key pressed");
        Ok(())
    }

    /// Presses every input in order, stopping at the first malformed one
    pub fn press_all(&mut self, inputs: impl IntoIterator<Item = Input>) -> CalcResult<()> {
        inputs.into_iter().try_for_each(|input| self.press(input))
    }

    /// Parses and presses a key sequence (see [`crate::core::parse_keys`])
    pub fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        let inputs = crate::core::parse_keys(keys)?;
        self.press_all(inputs)
    }

    /// Appends a digit to the number being entered
    pub fn digit(&mut self, d: u8) -> CalcResult<()> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        if self.display.text() == "0" && d == 0 {
            return Ok(());
        }
        if self.state.waiting_for_operand {
            self.display.clear();
            self.state.waiting_for_operand = false;
        }
        let text = format!("{}{d}", self.display.text());
        self.display.set_text(&text);
        Ok(())
    }

    /// Adds a decimal point unless the number already has one
    pub fn point(&mut self) {
        if self.state.waiting_for_operand {
            self.display.set_text("0");
        }
        if !self.display.text().contains('.') {
            let text = format!("{}.", self.display.text());
            self.display.set_text(&text);
        }
        self.state.waiting_for_operand = false;
    }

    /// Negates the displayed number; zero is left alone
    pub fn flip_sign(&mut self) {
        let text = self.display.text();
        let value = parse_operand(text);
        let flipped = if value > 0.0 {
            format!("-{text}")
        } else if value < 0.0 {
            text.strip_prefix('-').unwrap_or(text).to_string()
        } else {
            return;
        };
        self.display.set_text(&flipped);
    }

    /// Drops the last character of the number being entered
    pub fn backspace(&mut self) {
        if self.state.waiting_for_operand {
            return;
        }
        let mut text = self.display.text().to_string();
        text.pop();
        if text.is_empty() {
            text.push('0');
            self.state.waiting_for_operand = true;
        }
        self.display.set_text(&text);
    }

    /// Discards the number being entered, keeping pending operations
    pub fn clear(&mut self) {
        if self.state.waiting_for_operand {
            return;
        }
        self.display.set_text("0");
        self.state.waiting_for_operand = true;
    }

    /// Resets everything to the initial state
    pub fn clear_all(&mut self) {
        self.state = EngineState::default();
        self.display.set_text("0");
    }

    /// `+` or `-`: resolves everything pending, then waits for the next operand
    pub fn additive_op(&mut self, op: AdditiveOp) {
        let result = self.try_additive_op(op);
        self.finish(result);
    }

    /// `×` or `÷`: resolves a pending multiplicative operator only
    pub fn multiplicative_op(&mut self, op: MultiplicativeOp) {
        let result = self.try_multiplicative_op(op);
        self.finish(result);
    }

    /// `=`: resolves everything and shows the total.
    ///
    /// The total is cleared once shown, so `=` never repeats the last
    /// operation and the next key starts a new calculation.
    pub fn equals(&mut self) {
        let result = self.try_equals();
        self.finish(result);
    }

    fn try_additive_op(&mut self, op: AdditiveOp) -> CalcResult<()> {
        let mut operand = self.display.value();

        if let Some(pending) = self.state.pending_multiplicative {
            self.state.apply(operand, pending.into())?;
            operand = self.state.factor_so_far;
            self.show(operand);
            self.state.factor_so_far = 0.0;
            self.state.pending_multiplicative = None;
        }

        if let Some(pending) = self.state.pending_additive {
            self.state.apply(operand, pending.into())?;
            let sum = self.state.sum_so_far;
            self.show(sum);
        } else {
            self.state.sum_so_far = operand;
        }

        self.state.pending_additive = Some(op);
        self.state.waiting_for_operand = true;
        Ok(())
    }

    fn try_multiplicative_op(&mut self, op: MultiplicativeOp) -> CalcResult<()> {
        let operand = self.display.value();

        if let Some(pending) = self.state.pending_multiplicative {
            self.state.apply(operand, pending.into())?;
            let factor = self.state.factor_so_far;
            self.show(factor);
        } else {
            self.state.factor_so_far = operand;
        }

        self.state.pending_multiplicative = Some(op);
        self.state.waiting_for_operand = true;
        Ok(())
    }

    fn try_equals(&mut self) -> CalcResult<()> {
        let mut operand = self.display.value();

        if let Some(pending) = self.state.pending_multiplicative {
            self.state.apply(operand, pending.into())?;
            operand = self.state.factor_so_far;
            self.state.factor_so_far = 0.0;
            self.state.pending_multiplicative = None;
        }

        if let Some(pending) = self.state.pending_additive {
            self.state.apply(operand, pending.into())?;
            self.state.pending_additive = None;
        } else {
            self.state.sum_so_far = operand;
        }

        let sum = self.state.sum_so_far;
        self.show(sum);
        self.state.sum_so_far = 0.0;
        self.state.waiting_for_operand = true;
        Ok(())
    }

    fn finish(&mut self, result: CalcResult<()>) {
        if let Err(err) = result {
            self.abort(&err);
        }
    }

    fn abort(&mut self, err: &CalcError) {
        tracing::warn!(error = %err, "calculation aborted");
        self.clear_all();
        self.display.set_text(ERROR_MARKER);
    }

    fn show(&mut self, value: f64) {
        self.display.set_text(&format_number(value));
    }
}
