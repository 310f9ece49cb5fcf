//! The calculator shell: owns state and dispatches events.

use std::mem;

use crate::core::{CalculatorState, Digit, Event, Mode, Operator};

/// A calculator that owns its state and applies events in place.
///
/// This is the imperative shell over the pure transitions: one writer (the
/// `press` dispatch point), any number of readers. Each method runs to
/// completion before the next event is accepted and returns the updated
/// state for immediate re-render, matching a UI event-handling model that
/// processes one user action at a time.
///
/// # Example
///
/// ```rust
/// use reckon::{Calculator, Digit, Operator};
///
/// let mut calc = Calculator::new();
/// calc.digit(Digit::new(5).unwrap());
/// calc.choose_operator(Operator::Add);
/// calc.digit(Digit::new(3).unwrap());
/// calc.equals();
///
/// assert_eq!(calc.display(), "8");
/// ```
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create a calculator in the initial state (display `"0"`).
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// The current state, for rendering.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The current display string.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The derived mode of the current state.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Apply one event. This is the single write path for the owned state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{Calculator, Event};
    ///
    /// let mut calc = Calculator::new();
    /// for key in "6+3*2=".chars() {
    ///     calc.press(Event::try_from(key).unwrap());
    /// }
    ///
    /// // Left to right, no precedence: (6 + 3) * 2.
    /// assert_eq!(calc.display(), "18");
    /// ```
    pub fn press(&mut self, event: Event) -> &CalculatorState {
        self.state = mem::take(&mut self.state).transition(event);
        &self.state
    }

    /// Press a digit key.
    pub fn digit(&mut self, digit: Digit) -> &CalculatorState {
        self.press(Event::Digit(digit))
    }

    /// Press the decimal point key.
    pub fn decimal_point(&mut self) -> &CalculatorState {
        self.press(Event::DecimalPoint)
    }

    /// Press the clear key.
    pub fn clear(&mut self) -> &CalculatorState {
        self.press(Event::Clear)
    }

    /// Press an operator key.
    pub fn choose_operator(&mut self, op: Operator) -> &CalculatorState {
        self.press(Event::Operator(op))
    }

    /// Press the equals key.
    pub fn equals(&mut self) -> &CalculatorState {
        self.press(Event::Equals)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
