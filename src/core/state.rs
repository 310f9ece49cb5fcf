//! Calculator state and its derived display mode.
//!
//! `CalculatorState` is an immutable value holding the four pieces of state
//! behind a four-function calculator display. The transition operations
//! consume a state and return the successor; the inspection methods here
//! are pure reads for rendering and testing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operator::Operator;

/// Sentinel display string shown when a computation is undefined or
/// non-finite (division by zero, overflow beyond representable range).
///
/// Only `clear` fully resets the machine from the error display, though a
/// digit or decimal point press starts fresh entry directly from it.
pub const ERROR_DISPLAY: &str = "Error";

/// The full state of the calculator.
///
/// Four fields drive everything: the textual display register, the operand
/// captured before a pending operator, the pending operator itself, and a
/// flag marking the window between choosing an operator and typing the next
/// digit (when digit entry replaces rather than appends).
///
/// States are only reachable through the transition operations, which keep
/// the structural invariants checked by [`invariants`](super::invariants):
/// the display is never empty, holds at most one decimal point, and is
/// always either a numeral or the error marker.
///
/// # Example
///
/// ```rust
/// use reckon::{CalculatorState, Digit, Operator};
///
/// let state = CalculatorState::new()
///     .digit(Digit::new(7).unwrap())
///     .choose_operator(Operator::Add)
///     .digit(Digit::new(5).unwrap())
///     .equals();
///
/// assert_eq!(state.display(), "12");
/// assert_eq!(state.first_operand(), Some(12.0));
/// assert_eq!(state.operator(), None);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_input: String,
    pub(crate) first_operand: Option<f64>,
    pub(crate) operator: Option<Operator>,
    pub(crate) waiting_for_second_operand: bool,
}

/// Derived classification of a state, for rendering and testing.
///
/// The mode is computed from the four state fields, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// No operator pending; digits accumulate into the display.
    Entering,
    /// An operator was just chosen; the next digit replaces the display.
    AwaitingOperand,
    /// An operator is pending and the second operand is being typed.
    Accumulating,
    /// The display holds the error marker; `clear` fully resets.
    Error,
}

impl Mode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Accumulating => "Accumulating",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the initial state: display `"0"`, no operand, no operator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::CalculatorState;
    ///
    /// let state = CalculatorState::new();
    /// assert_eq!(state.display(), "0");
    /// assert_eq!(state.first_operand(), None);
    /// assert_eq!(state.operator(), None);
    /// assert!(!state.is_waiting_for_second_operand());
    /// ```
    pub fn new() -> Self {
        Self {
            current_input: "0".to_owned(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
        }
    }

    /// The display string: the numeral being typed or the last result, or
    /// the error marker.
    pub fn display(&self) -> &str {
        &self.current_input
    }

    /// The operand captured before the pending operator, if a chain is
    /// active.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The pending binary operator, if one has been chosen.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit press replaces the display instead of
    /// appending to it.
    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// Whether the display holds the error marker.
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_DISPLAY
    }

    /// The numeric reading of the display.
    ///
    /// The error marker is the only display string that is not a numeral;
    /// it reads as zero, which keeps every transition total.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{CalculatorState, Digit};
    ///
    /// let state = CalculatorState::new()
    ///     .digit(Digit::new(4).unwrap())
    ///     .decimal_point()
    ///     .digit(Digit::new(5).unwrap());
    ///
    /// assert_eq!(state.value(), 4.5);
    /// ```
    pub fn value(&self) -> f64 {
        self.current_input.parse().unwrap_or(0.0)
    }

    /// Classify this state into its derived [`Mode`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{CalculatorState, Digit, Mode, Operator};
    ///
    /// let state = CalculatorState::new().digit(Digit::new(9).unwrap());
    /// assert_eq!(state.mode(), Mode::Entering);
    ///
    /// let state = state.choose_operator(Operator::Divide);
    /// assert_eq!(state.mode(), Mode::AwaitingOperand);
    ///
    /// let state = state.digit(Digit::new(3).unwrap());
    /// assert_eq!(state.mode(), Mode::Accumulating);
    /// ```
    pub fn mode(&self) -> Mode {
        if self.is_error() {
            Mode::Error
        } else if self.operator.is_none() {
            Mode::Entering
        } else if self.waiting_for_second_operand {
            Mode::AwaitingOperand
        } else {
            Mode::Accumulating
        }
    }
}
