//! Effectful operations: the imperative shell around the pure engine.
//!
//! # Key Concepts
//!
//! - **Session**: [`Calculator`] owns the live state and mode and logs each step
//! - **Relay**: [`solve`] sends a problem to a language model as a Stillwater effect
//! - **Backends**: [`SolverBackend`] is the seam; [`GeminiBackend`] talks HTTP
//!
//! # Zero-Cost Abstractions
//!
//! Following Stillwater 0.11.0 conventions, the relay returns `impl Effect`
//! and does nothing until run against a [`SolverEnv`].

mod error;
mod gemini;
mod session;
mod solver;

pub use error::ServiceError;
pub use gemini::{extract_text, request_body, GeminiBackend};
pub use session::Calculator;
pub use solver::{
    build_prompt, parse_solution, response_schema, solve, AiSolution, RequestToken, SolveRequest,
    Solver, SolverBackend, SolverEnv, Tracked,
};
