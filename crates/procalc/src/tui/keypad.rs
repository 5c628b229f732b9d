//! Keypad button grids.
//!
//! Two grids mirror the widget's button panels: the standard pad with
//! digits, operators and editing keys, and the scientific pad with the
//! unary functions, shown only while scientific mode is on. Buttons can be
//! clicked (hit-tested from mouse coordinates) or highlighted to echo a
//! key press.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOp, UnaryFn};

/// Action a keypad button performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0-9).
    Digit(u8),
    /// Append the decimal point.
    Point,
    /// Select a pending binary operation.
    Operator(BinaryOp),
    /// Fold the pending expression.
    Equals,
    /// Reset the operands and pending operation.
    Clear,
    /// Drop the last character of the current operand.
    Delete,
    /// Divide the current operand by one hundred.
    Percent,
    /// Apply a unary scientific function.
    Unary(UnaryFn),
    /// Toggle the scientific keypad.
    ToggleMode,
}

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Legend drawn on the button.
    pub label: &'static str,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The action this button performs.
    pub action: ButtonAction,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl KeypadButton {
    fn new(label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(DIGIT_LABELS[usize::from(d.min(9))], ButtonAction::Digit(d))
    }

    /// Creates an operator button with the operation's display symbol.
    #[must_use]
    pub fn operator(op: BinaryOp) -> Self {
        Self::new(op.symbol(), ButtonAction::Operator(op))
    }

    /// Creates a unary-function button with the function's legend.
    #[must_use]
    pub fn unary(function: UnaryFn) -> Self {
        Self::new(function.label(), ButtonAction::Unary(function))
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// A row-major grid of keypad buttons.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order.
    buttons: Vec<KeypadButton>,
    /// Number of columns.
    cols: usize,
    /// Number of rows.
    rows: usize,
    /// Border title when rendered.
    title: &'static str,
}

impl Keypad {
    /// The standard calculator pad, a 5x4 grid:
    ///
    /// ```text
    /// [ C ] [ ⌫ ] [ % ] [ ÷ ]
    /// [ 7 ] [ 8 ] [ 9 ] [ × ]
    /// [ 4 ] [ 5 ] [ 6 ] [ - ]
    /// [ 1 ] [ 2 ] [ 3 ] [ + ]
    /// [ 0 ] [ . ] [ = ] [sci]
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let buttons = vec![
            KeypadButton::new("C", ButtonAction::Clear),
            KeypadButton::new("⌫", ButtonAction::Delete),
            KeypadButton::new("%", ButtonAction::Percent),
            KeypadButton::operator(BinaryOp::Divide),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(BinaryOp::Multiply),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(BinaryOp::Subtract),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(BinaryOp::Add),
            KeypadButton::digit(0),
            KeypadButton::new(".", ButtonAction::Point),
            KeypadButton::new("=", ButtonAction::Equals),
            KeypadButton::new("sci", ButtonAction::ToggleMode),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
            title: " Keypad ",
        }
    }

    /// The scientific pad, a 3x4 grid:
    ///
    /// ```text
    /// [sin] [cos] [tan] [ √ ]
    /// [lg ] [ln ] [x^y] [ π ]
    /// [ e ] [n! ] [|x|] [1/x]
    /// ```
    ///
    /// The `x^y` key is not a unary function: it selects the pending power
    /// operation, like the operator keys on the standard pad.
    #[must_use]
    pub fn scientific() -> Self {
        let buttons = vec![
            KeypadButton::unary(UnaryFn::Sin),
            KeypadButton::unary(UnaryFn::Cos),
            KeypadButton::unary(UnaryFn::Tan),
            KeypadButton::unary(UnaryFn::Sqrt),
            KeypadButton::unary(UnaryFn::Log10),
            KeypadButton::unary(UnaryFn::Ln),
            KeypadButton::new("x^y", ButtonAction::Operator(BinaryOp::Power)),
            KeypadButton::unary(UnaryFn::Pi),
            KeypadButton::unary(UnaryFn::E),
            KeypadButton::unary(UnaryFn::Factorial),
            KeypadButton::unary(UnaryFn::Abs),
            KeypadButton::unary(UnaryFn::Reciprocal),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 3,
            title: " Scientific ",
        }
    }

    /// Number of buttons on the pad.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the button performing an action.
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Marks a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button performing an action, if the pad has one.
    ///
    /// Returns whether a button was found.
    pub fn highlight_action(&mut self, action: ButtonAction) -> bool {
        match self.find_button(action) {
            Some(index) => {
                self.press_button(index);
                true
            }
            None => false,
        }
    }

    /// Iterates buttons with their `(row, col)` positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered area to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 cell on each side).
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over a keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.keypad.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if (inner.width as usize) < self.keypad.cols || (inner.height as usize) < self.keypad.rows
        {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) | ButtonAction::Point => {
                        Style::default().fg(Color::White)
                    }
                    ButtonAction::Operator(_) | ButtonAction::Percent => {
                        Style::default().fg(Color::Yellow)
                    }
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::Clear | ButtonAction::Delete => Style::default().fg(Color::Red),
                    ButtonAction::Unary(_) | ButtonAction::ToggleMode => {
                        Style::default().fg(Color::Cyan)
                    }
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_string(label_x, label_y, &label, style);
                }
            }
        }
    }
}
