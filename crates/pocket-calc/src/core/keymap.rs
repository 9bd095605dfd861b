//! Character-to-event mapping shared by every front end
//!
//! Terminal keys, scripted keystrokes, and anything else that produces
//! characters all go through [`event_for_char`], so identical logical input
//! yields identical transitions.

use super::event::{CalcEvent, Digit};
use super::operations::Operator;

/// Event for the Enter key
pub const ENTER: CalcEvent = CalcEvent::Operator(Operator::Equals);

/// Event for the Escape key
pub const ESCAPE: CalcEvent = CalcEvent::Clear;

/// Key binding table, used by help screens and `pocketcalc keys`
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("0-9", "Digit"),
    (".", "Decimal point"),
    ("+ - * /", "Add, subtract, multiply, divide"),
    ("Enter =", "Equals"),
    ("Esc c C", "Clear"),
    ("%", "Percent"),
    ("n N", "Toggle sign"),
];

/// Maps a typed character to its event
#[must_use]
pub fn event_for_char(c: char) -> Option<CalcEvent> {
    if let Some(d) = Digit::from_char(c) {
        return Some(CalcEvent::Digit(d));
    }
    if let Some(op) = Operator::from_symbol(c) {
        return Some(CalcEvent::Operator(op));
    }
    match c {
        '.' => Some(CalcEvent::DecimalPoint),
        'c' | 'C' => Some(CalcEvent::Clear),
        '%' => Some(CalcEvent::Percentage),
        'n' | 'N' | '±' => Some(CalcEvent::ToggleSign),
        _ => None,
    }
}

/// The canonical keyboard character for an event.
///
/// `=` is returned for equals and `C` for clear; front ends that bind Enter
/// and Escape map those separately through [`ENTER`] and [`ESCAPE`].
#[must_use]
pub const fn char_for_event(event: CalcEvent) -> char {
    match event {
        CalcEvent::Digit(d) => d.as_char(),
        CalcEvent::DecimalPoint => '.',
        CalcEvent::Clear => 'C',
        CalcEvent::ToggleSign => 'n',
        CalcEvent::Percentage => '%',
        CalcEvent::Operator(Operator::Add) => '+',
        CalcEvent::Operator(Operator::Subtract) => '-',
        CalcEvent::Operator(Operator::Multiply) => '*',
        CalcEvent::Operator(Operator::Divide) => '/',
        CalcEvent::Operator(Operator::Equals) => '=',
    }
}
