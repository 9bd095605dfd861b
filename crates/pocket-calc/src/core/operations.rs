//! Binary operators and their arithmetic
//!
//! Error prevention - a closed operator enum means no unknown
//! operator can ever sit in the pending slot

use serde::{Deserialize, Serialize};

/// Operators accepted by [`CalculatorState::apply_operator`](super::CalculatorState::apply_operator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (×)
    #[serde(rename = "×")]
    Multiply,
    /// Division (÷)
    #[serde(rename = "÷")]
    Divide,
    /// Equals (=), terminates a chain
    #[serde(rename = "=")]
    Equals,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equals,
    ];

    /// Returns the operator glyph shown on the keypad
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Equals => '=',
        }
    }

    /// Looks up an operator by glyph or by its ASCII keyboard spelling
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Resolves `left <op> right`.
    ///
    /// Division by zero yields `0`. `=` has no arithmetic and returns `None`.
    #[must_use]
    pub fn resolve(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Subtract => Some(left - right),
            Self::Multiply => Some(left * right),
            Self::Divide => Some(if right == 0.0 { 0.0 } else { left / right }),
            Self::Equals => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
