//! NovaCalc: a pure calculator engine with an AI solver relay
//!
//! NovaCalc follows Stillwater's "pure core, imperative shell" philosophy.
//! The expression engine is a set of pure functions over a value-typed
//! state, while the network-facing solver relay is isolated in an Effect.
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`] holds display, pending expression, last result and history
//! - **Actions**: digits, operators, evaluate, scientific functions, delete and clear
//! - **History**: an immutable, bounded record of successful evaluations
//! - **Solver**: a Gemini-backed relay returning step-by-step solutions
//!
//! # Example
//!
//! ```rust
//! use novacalc::core::{Action, CalculatorState, Operator, ScientificFn};
//!
//! let state = CalculatorState::new()
//!     .enter_digit('1')
//!     .enter_digit('6')
//!     .apply_scientific(ScientificFn::Sqrt)
//!     .enter_operator(Operator::Multiply)
//!     .enter_digit('3')
//!     .apply(&Action::Evaluate);
//!
//! assert_eq!(state.display(), "12");
//! assert_eq!(state.history().latest().unwrap().expression, "4 × 3");
//! ```

pub mod arith;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use config::SolverConfig;
pub use core::{Action, CalculatorState, History, HistoryEntry, Mode, Operator, ScientificFn};
pub use effects::{AiSolution, Calculator, GeminiBackend, ServiceError, Solver, SolverEnv};
