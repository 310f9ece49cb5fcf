//! Structural invariant checks for `CalculatorState`.
//!
//! Every state reachable through the transition operations upholds the
//! invariants checked here. The checks accumulate ALL violations found
//! rather than stopping at the first.
//!
//! Checked invariants:
//! - The display is never empty.
//! - The display holds at most one decimal point.
//! - The display is either the error marker or parses as `f64` (possibly
//!   infinite: digit entry is unbounded and has no length cap).
//! - A pending operator always has a first operand.
//!
//! Note that "error implies no pending operator" holds only at the moment
//! an arithmetic error is raised, not for every reachable state: an
//! operator press while the marker is displayed installs a new operator
//! without touching the display. The error-entry behavior is asserted by
//! the transition tests instead.

use thiserror::Error;

use super::state::CalculatorState;

/// A way in which a `CalculatorState` fails its structural invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("display is empty")]
    EmptyDisplay,

    #[error("display {input:?} holds more than one decimal point")]
    MultipleDecimalPoints { input: String },

    #[error("display {input:?} is neither a numeral nor the error marker")]
    UnparseableDisplay { input: String },

    #[error("operator pending without a first operand")]
    OperatorWithoutOperand,
}

/// Collect every invariant violation in `state`.
///
/// Returns an empty vector for a well-formed state.
pub fn violations(state: &CalculatorState) -> Vec<Violation> {
    let mut found = Vec::new();
    let input = state.display();

    if input.is_empty() {
        found.push(Violation::EmptyDisplay);
    }

    if input.matches('.').count() > 1 {
        found.push(Violation::MultipleDecimalPoints {
            input: input.to_owned(),
        });
    }

    if !state.is_error() && input.parse::<f64>().is_err() {
        found.push(Violation::UnparseableDisplay {
            input: input.to_owned(),
        });
    }

    if state.operator().is_some() && state.first_operand().is_none() {
        found.push(Violation::OperatorWithoutOperand);
    }

    found
}

/// Check all invariants, returning every violation on failure.
///
/// # Example
///
/// ```rust
/// use reckon::core::invariants;
/// use reckon::CalculatorState;
///
/// assert!(invariants::check(&CalculatorState::new()).is_ok());
/// ```
pub fn check(state: &CalculatorState) -> Result<(), Vec<Violation>> {
    let found = violations(state);
    if found.is_empty() {
        Ok(())
    } else {
        Err(found)
    }
}
