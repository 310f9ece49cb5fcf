//! Imperative shell around the pure calculator core.
//!
//! A `Calculator` owns the single `CalculatorState` instance and is the one
//! dispatch point for events; rendering collaborators read the state back
//! through its accessors.

mod machine;

pub use machine::Calculator;
