//! Pure expression engine.
//!
//! This module contains the functional core of the calculator:
//! - The state value and its coarse phase
//! - User actions, operators and scientific functions
//! - Bounded calculation history
//! - Transition functions from one state to the next
//!
//! All logic in this module is pure (no side effects apart from stamping
//! history entries with an id and the current time), following the
//! "pure core, imperative shell" philosophy.

mod action;
mod engine;
mod history;
mod state;

pub use action::{Action, Mode, Operator, ScientificFn};
pub use engine::StepOutcome;
pub use history::{History, HistoryEntry, HISTORY_LIMIT};
pub use state::{CalculatorState, Phase, ERROR_DISPLAY};
