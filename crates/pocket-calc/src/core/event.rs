//! Input events accepted by the state machine

use serde::{Deserialize, Serialize};

use super::operations::Operator;

/// A single decimal digit, `0` through `9`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Reads an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One calculator event; keyboard and pointer input both reduce to these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum CalcEvent {
    /// Enter a digit
    Digit(Digit),
    /// Enter a decimal point
    DecimalPoint,
    /// Reset to the initial state
    Clear,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percentage,
    /// Apply a binary operator or `=`
    Operator(Operator),
}

impl CalcEvent {
    /// Shorthand for a digit event; `None` above 9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// Label printed on the keypad button for this event
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::DecimalPoint => '.',
            Self::Clear => 'C',
            Self::ToggleSign => '±',
            Self::Percentage => '%',
            Self::Operator(op) => op.symbol(),
        }
    }
}

impl std::fmt::Display for CalcEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
