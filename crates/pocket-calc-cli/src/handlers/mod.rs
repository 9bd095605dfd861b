//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - A pure rendering function the tests call directly

pub mod eval;
pub mod keys;
pub mod tui;

pub use eval::{execute_eval, render_eval};
pub use keys::{execute_keys, render_keys};
pub use tui::{execute_tui, run_app};
