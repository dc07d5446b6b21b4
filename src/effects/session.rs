//! Interactive calculator session.

use crate::core::{Action, CalculatorState, History, Mode, StepOutcome};
use tracing::{debug, info};

/// The single live calculator: current state plus the selected mode.
///
/// Drives the pure engine and logs what each action did. The presentation
/// layer owns one of these and reads the state back after every input.
///
/// # Example
///
/// ```rust
/// use novacalc::effects::Calculator;
///
/// let mut calc = Calculator::new();
/// for key in ["1", "2", "*", "3", "Enter"] {
///     calc.press_key(key);
/// }
///
/// assert_eq!(calc.display(), "36");
/// assert_eq!(calc.history().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    mode: Mode,
}

impl Calculator {
    /// Create a session in standard mode showing `0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            state: CalculatorState::new(),
            mode,
        }
    }

    /// Resume from a previously saved state.
    pub fn from_state(state: CalculatorState, mode: Mode) -> Self {
        Self { state, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. The engine state is kept as is.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(from = self.mode.name(), to = mode.name(), "mode changed");
            self.mode = mode;
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Whether the current mode offers `action`.
    pub fn offers(&self, action: &Action) -> bool {
        self.mode.offers(action)
    }

    /// Apply an action to the engine regardless of mode.
    pub fn dispatch(&mut self, action: Action) -> StepOutcome {
        let (next, outcome) = self.state.step(&action);

        match &outcome {
            StepOutcome::Evaluated(entry) => {
                debug!(
                    expression = %entry.expression,
                    result = %entry.result,
                    "evaluated"
                );
            }
            StepOutcome::Failed(err) => {
                debug!(expression = %next.expression(), error = %err, "evaluation failed");
            }
            StepOutcome::Ignored => {
                debug!(?action, "input ignored");
            }
            StepOutcome::Updated => {}
        }

        self.state = next;
        outcome
    }

    /// Handle a keyboard key.
    ///
    /// Returns `None` when the key is unmapped or the mapped action is not
    /// offered in the current mode; the state is then untouched.
    pub fn press_key(&mut self, key: &str) -> Option<StepOutcome> {
        let action = Action::from_key(key)?;
        if !self.offers(&action) {
            debug!(key, mode = self.mode.name(), "key not offered in mode");
            return None;
        }
        Some(self.dispatch(action))
    }

    /// Reset the entry state, keeping history and mode.
    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
    }
}
