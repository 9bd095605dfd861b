//! TUI Application State
//!
//! Error prevention - the app owns the one state value and swaps
//! it wholesale on every event

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui;
use crate::core::{CalcEvent, CalculatorState, Pending};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator state, replaced on every event
    state: CalculatorState,
    /// Keypad with highlight state for the last pressed button
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app resuming from `state`
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
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

    /// Applies one calculator event and highlights its button
    pub fn dispatch(&mut self, event: CalcEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        self.keypad.highlight(event);
        tracing::debug!(
            event = %event,
            display = self.state.display(),
            waiting = self.state.waiting_for_operand(),
            "event applied"
        );
    }

    /// Applies a keyboard action
    pub fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calc(event) => self.dispatch(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse event against the layout for a frame of size `area`.
    ///
    /// Returns the event emitted by the clicked button, if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<CalcEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let keypad_area = ui::layout(area).keypad;
        let index = self.keypad.hit_test(keypad_area, mouse.column, mouse.row)?;
        let event = self.keypad.get_button(index)?.event;
        tracing::trace!(column = mouse.column, row = mouse.row, button = %event, "keypad click");
        self.dispatch(event);
        Some(event)
    }

    /// The pending operation as shown above the display, e.g. `"7 ×"`
    #[must_use]
    pub fn pending_line(&self) -> String {
        match self.state.pending() {
            Pending::Idle => String::new(),
            Pending::Operator { op, .. } => {
                format!("{} {}", self.state.previous_value(), op.symbol())
            }
        }
    }
}
