//! TUI Frontend for Calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, CalculatorLayout, CalculatorUI, HELP_EXTRA, HELP_WIDTH};
