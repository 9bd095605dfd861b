//! Clickable keypad for the TUI calculator
//!
//! Visual feedback - Visual buttons make calculator state obvious
//!
//! The keypad can be:
//! - Clicked with the mouse (hit-tested against its screen area)
//! - Highlighted when the matching key is typed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{CalcEvent, Digit, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The event this button emits
    pub event: CalcEvent,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub const fn new(event: CalcEvent, row: usize, col: usize) -> Self {
        Self {
            label: event.label(),
            pressed: false,
            event,
            row,
            col,
            span: 1,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8, row: usize, col: usize) -> Self {
        let digit = Digit::new(d.min(9)).unwrap_or_default();
        Self::new(CalcEvent::Digit(digit), row, col)
    }

    /// Creates an operator button
    #[must_use]
    pub const fn operator(op: Operator, row: usize, col: usize) -> Self {
        Self::new(CalcEvent::Operator(op), row, col)
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub const fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Whether the button covers grid cell (`row`, `col`)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 5x4 grid
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
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
    /// Creates the standard pocket calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButton::new(CalcEvent::Clear, 0, 0),
            KeypadButton::new(CalcEvent::ToggleSign, 0, 1),
            KeypadButton::new(CalcEvent::Percentage, 0, 2),
            KeypadButton::operator(Operator::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(7, 1, 0),
            KeypadButton::digit(8, 1, 1),
            KeypadButton::digit(9, 1, 2),
            KeypadButton::operator(Operator::Multiply, 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::digit(4, 2, 0),
            KeypadButton::digit(5, 2, 1),
            KeypadButton::digit(6, 2, 2),
            KeypadButton::operator(Operator::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::digit(1, 3, 0),
            KeypadButton::digit(2, 3, 1),
            KeypadButton::digit(3, 3, 2),
            KeypadButton::operator(Operator::Add, 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::digit(0, 4, 0).spanning(2),
            KeypadButton::new(CalcEvent::DecimalPoint, 4, 2),
            KeypadButton::operator(Operator::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
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

    /// Index of the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button that emits `event`
    #[must_use]
    pub fn find_button(&self, event: CalcEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
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

    /// Highlights the button for `event`, releasing any other
    pub fn highlight(&mut self, event: CalcEvent) {
        self.release_all();
        if let Some(idx) = self.find_button(event) {
            self.press_button(idx);
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Cell size inside the bordered `area`, `None` if too small to hold a button
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let btn_width = area.width.saturating_sub(2) / self.cols as u16;
        let btn_height = area.height.saturating_sub(2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            None
        } else {
            Some((btn_width, btn_height))
        }
    }

    /// Screen rectangle of a button when the keypad is drawn in `area`
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let (btn_width, btn_height) = self.cell_size(area)?;
        Some(Rect {
            x: area.x + 1 + btn.col as u16 * btn_width,
            y: area.y + 1 + btn.row as u16 * btn_height,
            width: btn.span as u16 * btn_width,
            height: btn_height,
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area)?;
        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            self.index_at(row, col)
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

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                return; // Too small to render
            };

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.event {
                    CalcEvent::Digit(_) | CalcEvent::DecimalPoint => {
                        Style::default().fg(Color::White)
                    }
                    CalcEvent::Operator(Operator::Equals) => Style::default().fg(Color::Green),
                    CalcEvent::Operator(_) => Style::default().fg(Color::Yellow),
                    CalcEvent::Clear => Style::default().fg(Color::Red),
                    CalcEvent::ToggleSign | CalcEvent::Percentage => {
                        Style::default().fg(Color::Cyan)
                    }
                }
            };

            // Label centered in the button cell
            if rect.width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = rect.x + rect.width.saturating_sub(3) / 2;
                let label_y = rect.y + rect.height / 2;
                buf.set_span(label_x, label_y, &Span::styled(label, style), rect.width);
            }
        }
    }
}
