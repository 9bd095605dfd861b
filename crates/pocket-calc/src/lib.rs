//! Pocket Calculator - an immediate-execution calculator state machine
//!
//! The calculator applies each operator as soon as the next one arrives,
//! strictly left to right, like a hand-held device: `3 + 4 × 2 =` shows `14`.
//!
//! # Testing Principles
//!
//! - **Error prevention**: A pending operator always carries its left operand
//! - **Balanced testing**: Keyboard and pointer input run the same specifications
//! - **Visual feedback**: The display is the only numeral the user ever sees
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let state = CalculatorState::new()
//!     .input_digit(Digit::new(6).unwrap())
//!     .apply_operator(Operator::Multiply)
//!     .input_digit(Digit::new(7).unwrap())
//!     .apply_operator(Operator::Equals);
//! assert_eq!(state.display(), "42");
//!
//! // Or replay keystrokes
//! assert_eq!(script::run("3+4*2=").unwrap().display(), "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod script;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "tui")]
pub mod driver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_number, CalcEvent, CalculatorState, Digit, Operator, Pending,
        StateSnapshot,
    };
    pub use crate::script::{self, ReplayStep, ScriptError, ScriptResult, Trace};

    #[cfg(feature = "tui")]
    pub use crate::driver::{CalculatorDriver, KeyboardDriver, PointerDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let state = CalculatorState::new().apply(CalcEvent::digit(5).unwrap());
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_prelude_script() {
        assert_eq!(script::run("9/3=").unwrap().display(), "3");
        assert!(matches!(
            script::run("9?3"),
            Err(ScriptError::UnknownKey { key: '?', .. })
        ));
    }

    #[test]
    fn test_prelude_formatting() {
        assert_eq!(format_number(parse_number("2.50")), "2.5");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_prelude_drivers() {
        let mut driver = KeyboardDriver::new();
        driver.enter("1+1=").unwrap();
        assert_eq!(driver.display(), "2");
        let _ = PointerDriver::new();
    }
}
