//! Calculator state machine
//!
//! Holds the current entry, the pending operand and the pending operation,
//! and implements the five transitions (append, choose, compute, delete,
//! clear). Invalid input never fails: it is either a no-op or, for division
//! by zero, the [`ERROR_SENTINEL`] entry.

pub mod number;
mod operations;
mod state;

pub use operations::Operation;
pub use state::{CalculatorState, Entry};

/// Text shown in place of a result that is not a number.
pub const ERROR_SENTINEL: &str = "Error";
