//! Input events: the discrete button presses a UI forwards to the engine.
//!
//! The presentation layer owns the button grid; the engine only sees the
//! typed vocabulary defined here. Untyped input (a key character, a raw
//! byte, a serde payload) is validated at this boundary, so once an `Event`
//! exists every transition is total.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::operator::Operator;

/// Errors from turning untyped input into the event vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),

    #[error("digit value out of range: {0} (expected 0 through 9)")]
    DigitOutOfRange(u8),

    #[error("no calculator key is labelled {0:?}")]
    UnknownKey(char),
}

/// A single decimal digit, 0 through 9.
///
/// A `Digit` can only be obtained through a validating constructor, so a
/// value of this type is always in range. Deserialization revalidates
/// through the same path.
///
/// # Example
///
/// ```rust
/// use reckon::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
///
/// assert!(Digit::new(12).is_err());
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its value. Fails for values above 9.
    pub fn new(value: u8) -> Result<Self, EventError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(EventError::DigitOutOfRange(value))
        }
    }

    /// The digit's numeric value, 0 through 9.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit's display character, `'0'` through `'9'`.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = EventError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl TryFrom<char> for Digit {
    type Error = EventError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_digit(10) {
            Some(value) => Ok(Self(value as u8)),
            None => Err(EventError::NotADigit(key)),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete user action forwarded by the presentation layer.
///
/// These are the five operations of the calculator engine. Each is handled
/// by exactly one transition; `CalculatorState::transition` dispatches
/// exhaustively.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A digit key, `0` through `9`.
    Digit(Digit),
    /// The decimal point key.
    DecimalPoint,
    /// The clear key; re-initializes the machine.
    Clear,
    /// One of the four operator keys.
    Operator(Operator),
    /// The equals key; evaluates the pending operator.
    Equals,
}

/// Decode a button label into its event.
///
/// Recognized labels: the digits, `'.'`, `'C'` (or `'c'`), `'='`, and the
/// four operator symbols `'+'` `'-'` `'*'` `'/'`.
///
/// # Example
///
/// ```rust
/// use reckon::{Event, Operator};
///
/// assert_eq!(Event::try_from('+'), Ok(Event::Operator(Operator::Add)));
/// assert_eq!(Event::try_from('='), Ok(Event::Equals));
/// assert!(Event::try_from('%').is_err());
/// ```
impl TryFrom<char> for Event {
    type Error = EventError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key {
            '0'..='9' => Digit::try_from(key).map(Self::Digit),
            '.' => Ok(Self::DecimalPoint),
            'C' | 'c' => Ok(Self::Clear),
            '=' => Ok(Self::Equals),
            '+' | '-' | '*' | '/' => Operator::try_from(key).map(Self::Operator),
            other => Err(EventError::UnknownKey(other)),
        }
    }
}
