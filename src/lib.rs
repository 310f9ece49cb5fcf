//! Reckon: a pure functional four-function calculator engine
//!
//! Reckon models the input state machine behind a physical four-function
//! calculator: digits accumulate into a display register, at most one
//! binary operator is pending at a time, and equals evaluates the pending
//! operation and chains results left to right with no precedence. The core
//! is pure (every transition consumes a state and returns the successor),
//! while the `engine` module provides the small imperative shell a UI
//! drives. Presentation concerns (button grids, theming, rendering) stay
//! outside the crate: the UI forwards an `Event` per button press and reads
//! state back out.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, the four fields behind the display
//! - **Events**: `Event`, the five discrete button presses (digit, decimal
//!   point, clear, operator, equals)
//! - **Transitions**: total pure functions, one per operation; undefined
//!   arithmetic becomes the error display state, never a panic or an error
//!   return
//!
//! # Example
//!
//! ```rust
//! use reckon::{Calculator, Digit, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.digit(Digit::new(6).unwrap());
//! calc.choose_operator(Operator::Add);
//! calc.digit(Digit::new(3).unwrap());
//! calc.choose_operator(Operator::Multiply);
//! calc.digit(Digit::new(2).unwrap());
//! calc.equals();
//!
//! // Left to right, no precedence: (6 + 3) * 2.
//! assert_eq!(calc.display(), "18");
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{CalculatorState, Digit, Event, EventError, Mode, Operator, ERROR_DISPLAY};
pub use crate::engine::Calculator;
