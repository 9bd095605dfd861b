//! TUI rendering
//!
//! Visual feedback makes state visible

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::keymap::KEY_BINDINGS;

/// Width of the help sidebar
pub const HELP_WIDTH: u16 = 30;

/// Height of the display panel
pub const DISPLAY_HEIGHT: u16 = 4;

/// Title for the calculator frame
pub const TITLE: &str = " Pocket Calculator ";

/// Keys handled by the terminal front end only
pub const HELP_EXTRA: &[(&str, &str)] = &[("q Ctrl+C", "Quit"), ("mouse", "Click keypad")];

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Pending expression and display
    pub display: Rect,
    /// Clickable keypad
    pub keypad: Rect,
    /// Key help
    pub help: Rect,
}

/// Splits a frame into display, keypad, and help regions.
///
/// Shared by rendering and mouse hit-testing so both see the same keypad.
#[must_use]
pub fn layout(area: Rect) -> CalculatorLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(24), Constraint::Length(HELP_WIDTH)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(7)])
        .split(columns[0]);

    CalculatorLayout {
        display: rows[0],
        keypad: rows[1],
        help: columns[1],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the pending expression and the display, right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let display_style = if state.waiting_for_operand() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_line(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(state.display().to_string(), display_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = KEY_BINDINGS
            .iter()
            .chain(HELP_EXTRA)
            .map(|(keys, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{keys:>9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_help(regions.help, buf);
    }
}
