//! The four binary operators and their arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::event::EventError;

/// A binary arithmetic operator.
///
/// Exactly one operator may be pending at a time; chaining resolves the
/// pending one before installing the next, left to right, with no
/// precedence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Division by zero yields NaN (explicit guard, covering both signed
    /// zeros) rather than the IEEE infinity. Every undefined or overflowing
    /// result is therefore non-finite, which is what the transitions check
    /// before committing a result to the display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(6.0, 3.0), 9.0);
    /// assert_eq!(Operator::Divide.apply(9.0, 2.0), 4.5);
    /// assert!(Operator::Divide.apply(1.0, 0.0).is_nan());
    /// ```
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            Self::Add => first + second,
            Self::Subtract => first - second,
            Self::Multiply => first * second,
            Self::Divide => {
                if second == 0.0 {
                    f64::NAN
                } else {
                    first / second
                }
            }
        }
    }

    /// The button symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EventError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(EventError::UnknownKey(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
