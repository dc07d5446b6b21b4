//! Calculator state.
//!
//! `CalculatorState` is a plain value: every operation in
//! [`engine`](super::engine) takes a state by reference and returns the next
//! one. Whoever drives the calculator holds the single live instance.

use super::history::History;
use serde::{Deserialize, Serialize};

/// Display sentinel shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Complete state of the expression engine.
///
/// # Invariants
///
/// - `display` is never empty; it defaults to `"0"`.
/// - `expression` is empty or ends with `" <op> "` where `<op>` is one of
///   `+ - × ÷ %`.
/// - `history` holds at most [`HISTORY_LIMIT`](super::HISTORY_LIMIT) entries.
///
/// # Example
///
/// ```rust
/// use novacalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display(), "0");
/// assert_eq!(state.expression(), "");
/// assert_eq!(state.last_result(), None);
/// assert_eq!(state.phase(), Phase::Entering);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) expression: String,
    pub(crate) last_result: Option<String>,
    pub(crate) history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a state showing `0` with nothing pending and no history.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            last_result: None,
            history: History::new(),
        }
    }

    /// The operand currently being edited.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The left-hand side and pending operator, rendered above the display.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Set right after an evaluation or scientific function; the next digit
    /// starts a fresh operand instead of appending.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Whether a binary operator is waiting for its right operand.
    pub fn has_pending_operator(&self) -> bool {
        !self.expression.is_empty()
    }

    /// Classify the state for display and logging.
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if self.last_result.is_some() {
            Phase::Result
        } else if self.has_pending_operator() {
            Phase::Pending
        } else {
            Phase::Entering
        }
    }
}

/// Coarse position of the engine in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand.
    Entering,
    /// An operator is pending; typing the right operand.
    Pending,
    /// Showing a result; the next digit replaces it.
    Result,
    /// Showing the error sentinel.
    Error,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
