//! Arithmetic error types.

use super::lexer::Token;
use thiserror::Error;

/// Errors produced while lexing, parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithError {
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("Malformed number '{literal}'")]
    MalformedNumber { literal: String },

    #[error("Unexpected token '{found}'")]
    UnexpectedToken { found: Token },

    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,

    /// Evaluation succeeded but produced NaN or an infinity.
    #[error("Result is not a finite number ({value})")]
    NonFinite { value: f64 },
}
