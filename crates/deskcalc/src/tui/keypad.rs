//! Keypad for the TUI calculator
//!
//! Every button maps to exactly one engine [`Input`]. The keypad is also the
//! mouse target: clicks are hit-tested against the rendered grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{AdditiveOp, Input, MultiplicativeOp};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The input this button sends
    pub input: Input,
}

impl KeypadButton {
    /// Creates an unpressed button for `input`
    #[must_use]
    pub fn new(input: Input) -> Self {
        Self {
            label: input.label(),
            pressed: false,
            input,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

const ROWS: usize = 5;
const COLS: usize = 4;

const LAYOUT: [Input; ROWS * COLS] = [
    Input::Backspace,
    Input::Clear,
    Input::ClearAll,
    Input::Multiplicative(MultiplicativeOp::Divide),
    Input::Digit(7),
    Input::Digit(8),
    Input::Digit(9),
    Input::Multiplicative(MultiplicativeOp::Multiply),
    Input::Digit(4),
    Input::Digit(5),
    Input::Digit(6),
    Input::Additive(AdditiveOp::Subtract),
    Input::Digit(1),
    Input::Digit(2),
    Input::Digit(3),
    Input::Additive(AdditiveOp::Add),
    Input::Digit(0),
    Input::Point,
    Input::FlipSign,
    Input::Equals,
];

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ ← ] [ C ] [ AC] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ ± ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: LAYOUT.iter().copied().map(KeypadButton::new).collect(),
            cols: COLS,
            rows: ROWS,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that sends `input`
    #[must_use]
    pub fn find_button(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `input`
    pub fn highlight(&mut self, input: Input) {
        self.release_all();
        if let Some(idx) = self.find_button(input) {
            self.press_button(idx);
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border takes one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.input {
        Input::Digit(_) | Input::Point => Style::default().fg(Color::White),
        Input::Additive(_) | Input::Multiplicative(_) => Style::default().fg(Color::Yellow),
        Input::Equals => Style::default().fg(Color::Green),
        Input::Clear | Input::ClearAll => Style::default().fg(Color::Red),
        Input::Backspace | Input::FlipSign => Style::default().fg(Color::Cyan),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
