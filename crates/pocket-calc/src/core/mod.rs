//! Core calculator module
//!
//! Principles:
//! - Error prevention: every transition is total, every state is valid
//! - Balanced testing: one state machine behind every front end

mod event;
pub mod keymap;
pub mod numeral;
mod operations;
mod state;

pub use event::{CalcEvent, Digit};
pub use numeral::{format_number, parse_number};
pub use operations::Operator;
pub use state::{CalculatorState, Pending, StateSnapshot};
