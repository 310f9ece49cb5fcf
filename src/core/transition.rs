//! The five transition operations of the calculator engine.
//!
//! Each operation is a pure function: it consumes the current state and
//! returns the successor. Every operation is total; undefined arithmetic
//! results transition to the error display state instead of panicking or
//! surfacing an error to the caller.

use super::event::{Digit, Event};
use super::operator::Operator;
use super::round::round_result;
use super::state::{CalculatorState, ERROR_DISPLAY};

impl CalculatorState {
    /// Press a digit key.
    ///
    /// Replaces the display when an operator was just chosen (clearing the
    /// waiting flag), and when the display is `"0"` or the error marker;
    /// appends otherwise. Digit strings are unbounded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{CalculatorState, Digit};
    ///
    /// let five = Digit::new(5).unwrap();
    ///
    /// // Pressing 5 on a fresh display yields "5", not "05".
    /// let state = CalculatorState::new().digit(five);
    /// assert_eq!(state.display(), "5");
    ///
    /// let state = state.digit(five);
    /// assert_eq!(state.display(), "55");
    /// ```
    pub fn digit(mut self, digit: Digit) -> Self {
        if self.waiting_for_second_operand {
            self.current_input = digit.to_string();
            self.waiting_for_second_operand = false;
        } else if self.current_input == "0" || self.is_error() {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit.as_char());
        }
        self
    }

    /// Press the decimal point key.
    ///
    /// Starts `"0."` when an operator was just chosen (clearing the waiting
    /// flag) and from the error state; otherwise appends a point only if
    /// the display has none yet, so repeated presses are no-ops.
    pub fn decimal_point(mut self) -> Self {
        if self.waiting_for_second_operand {
            self.current_input = "0.".to_owned();
            self.waiting_for_second_operand = false;
        } else if self.is_error() {
            self.current_input = "0.".to_owned();
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
        self
    }

    /// Press the clear key, returning the initial state.
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Press an operator key.
    ///
    /// The first operator in a fresh chain captures the display as the
    /// first operand. If an operator is already pending and a second
    /// operand has been typed, the pending operator is evaluated first
    /// (chaining, left to right, no precedence): a non-finite result
    /// abandons the chain and enters the error state without installing
    /// the new operator; otherwise the rounded result becomes both the
    /// display and the new first operand. Pressing an operator twice in a
    /// row, or right after equals, installs the new operator without
    /// evaluating anything. From the error state the display reads as
    /// zero, so the chain restarts from a zero first operand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{CalculatorState, Digit, Operator};
    ///
    /// let state = CalculatorState::new()
    ///     .digit(Digit::new(6).unwrap())
    ///     .choose_operator(Operator::Add)
    ///     .digit(Digit::new(3).unwrap())
    ///     // Chaining: 6 + 3 is evaluated before '*' is installed.
    ///     .choose_operator(Operator::Multiply);
    ///
    /// assert_eq!(state.display(), "9");
    /// assert_eq!(state.first_operand(), Some(9.0));
    /// assert_eq!(state.operator(), Some(Operator::Multiply));
    /// ```
    pub fn choose_operator(mut self, op: Operator) -> Self {
        let input_value = self.value();

        match (self.first_operand, self.operator) {
            (None, _) => {
                self.first_operand = Some(input_value);
            }
            (Some(first), Some(pending)) if !self.waiting_for_second_operand => {
                let result = pending.apply(first, input_value);
                if !result.is_finite() {
                    // The chain is abandoned: full reset behind the marker,
                    // and the new operator is not installed.
                    return Self {
                        current_input: ERROR_DISPLAY.to_owned(),
                        ..Self::new()
                    };
                }
                let rounded = round_result(result);
                self.current_input = rounded.to_string();
                self.first_operand = Some(rounded);
            }
            // Operator pressed twice in a row, or right after equals:
            // nothing to evaluate, the new operator is installed below.
            _ => {}
        }

        self.operator = Some(op);
        self.waiting_for_second_operand = true;
        self
    }

    /// Press the equals key.
    ///
    /// A no-op unless both an operator and a first operand are pending.
    /// Otherwise evaluates, rounds, and carries the result as the first
    /// operand, so a following operator chains from it while a following
    /// digit starts a fresh number. A non-finite result shows the error
    /// marker but keeps the first operand, unlike `choose_operator`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::{CalculatorState, Digit, Operator};
    ///
    /// let state = CalculatorState::new()
    ///     .digit(Digit::new(5).unwrap())
    ///     .choose_operator(Operator::Add)
    ///     .digit(Digit::new(3).unwrap())
    ///     .equals();
    ///
    /// assert_eq!(state.display(), "8");
    /// ```
    pub fn equals(mut self) -> Self {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return self;
        };

        let result = op.apply(first, self.value());
        if result.is_finite() {
            let rounded = round_result(result);
            self.current_input = rounded.to_string();
            self.first_operand = Some(rounded);
        } else {
            self.current_input = ERROR_DISPLAY.to_owned();
        }

        self.operator = None;
        self.waiting_for_second_operand = true;
        self
    }

    /// Apply one event, returning the successor state.
    ///
    /// This is the `(state, event) -> state` form of the five operations
    /// above; the match is exhaustive over the event vocabulary.
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::Digit(digit) => self.digit(digit),
            Event::DecimalPoint => self.decimal_point(),
            Event::Clear => self.clear(),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.equals(),
        }
    }
}
