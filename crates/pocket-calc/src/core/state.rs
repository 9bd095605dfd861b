//! Calculator state machine
//!
//! Error prevention - the pending operator carries its own left
//! operand, so "operator without context" cannot be represented
//!
//! Every transition consumes the current state and returns the next one.
//! Callers hold a single [`CalculatorState`] and replace it on each event.

use serde::{Deserialize, Serialize};

use super::event::{CalcEvent, Digit};
use super::numeral::{format_number, parse_number};
use super::operations::Operator;

/// The pending half of a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pending {
    /// No left operand stored
    #[default]
    Idle,
    /// An operator waiting for its right operand
    Operator {
        /// Left operand, exactly as it reads back from its displayed numeral
        left: f64,
        /// Operator to apply once the right operand is known
        op: Operator,
    },
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Pending,
    waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: Pending::Idle,
            waiting_for_operand: false,
        }
    }

    /// Returns the operand currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation
    #[must_use]
    pub const fn pending(&self) -> Pending {
        self.pending
    }

    /// Formatted left operand, or `""` when nothing is pending
    #[must_use]
    pub fn previous_value(&self) -> String {
        match self.pending {
            Pending::Idle => String::new(),
            Pending::Operator { left, .. } => format_number(left),
        }
    }

    /// Pending operator, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operator> {
        match self.pending {
            Pending::Idle => None,
            Pending::Operator { op, .. } => Some(op),
        }
    }

    /// True right after an operator; the next digit starts a new operand
    #[must_use]
    pub const fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Applies any event
    #[must_use]
    pub fn apply(self, event: CalcEvent) -> Self {
        match event {
            CalcEvent::Digit(d) => self.input_digit(d),
            CalcEvent::DecimalPoint => self.input_decimal_point(),
            CalcEvent::Clear => self.clear(),
            CalcEvent::ToggleSign => self.toggle_sign(),
            CalcEvent::Percentage => self.percentage(),
            CalcEvent::Operator(op) => self.apply_operator(op),
        }
    }

    /// Enters a digit, starting a fresh operand after an operator
    #[must_use]
    pub fn input_digit(mut self, digit: Digit) -> Self {
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        self
    }

    /// Enters a decimal point; a second point in the same operand is ignored
    #[must_use]
    pub fn input_decimal_point(mut self) -> Self {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Returns the initial state
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Negates the display
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        self.display = format_number(-parse_number(&self.display));
        self
    }

    /// Divides the display by 100
    #[must_use]
    pub fn percentage(mut self) -> Self {
        self.display = format_number(parse_number(&self.display) / 100.0);
        self
    }

    /// Applies an operator.
    ///
    /// With nothing pending the display becomes the left operand. Otherwise
    /// the pending operation is resolved left-to-right, the result is shown,
    /// and it becomes the left operand of `op` (or the chain ends on `=`).
    ///
    /// A pending `=` has nothing to resolve, so the state is returned
    /// unchanged. Stored left operands always go through the display format,
    /// so `previous_value()` is the operand the next operator uses.
    #[must_use]
    pub fn apply_operator(mut self, op: Operator) -> Self {
        let input_value = parse_number(&self.display);

        match self.pending {
            Pending::Idle => {
                self.pending = Pending::Operator {
                    left: displayed(input_value),
                    op,
                };
            }
            Pending::Operator {
                left,
                op: pending_op,
            } => {
                let Some(result) = pending_op.resolve(left, input_value) else {
                    tracing::trace!(
                        pending = %pending_op,
                        requested = %op,
                        "nothing to resolve, ignoring operator"
                    );
                    return self;
                };
                self.display = format_number(result);
                self.pending = if op == Operator::Equals {
                    Pending::Idle
                } else {
                    Pending::Operator {
                        left: parse_number(&self.display),
                        op,
                    }
                };
            }
        }

        self.waiting_for_operand = true;
        self
    }

    /// Applies an operator given by symbol; unknown symbols leave the state unchanged
    #[must_use]
    pub fn apply_operator_symbol(self, symbol: char) -> Self {
        match Operator::from_symbol(symbol) {
            Some(op) => self.apply_operator(op),
            None => {
                tracing::trace!(symbol = %symbol, "ignoring unknown operator symbol");
                self
            }
        }
    }

    /// Serializable view using the logical field names
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            display: self.display.clone(),
            previous_value: self.previous_value(),
            operation: self.operation(),
            waiting_for_operand: self.waiting_for_operand,
        }
    }
}

/// Value of `value` after a trip through the display format
fn displayed(value: f64) -> f64 {
    parse_number(&format_number(value))
}

/// Flat, serializable copy of a [`CalculatorState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Operand currently shown
    pub display: String,
    /// Left operand of the pending operation, `""` when idle
    pub previous_value: String,
    /// Pending operator
    pub operation: Option<Operator>,
    /// Whether the next digit starts a new operand
    pub waiting_for_operand: bool,
}
