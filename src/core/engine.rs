//! Pure transitions of the expression engine.
//!
//! Every operation borrows the current [`CalculatorState`] and returns the
//! next one. Failures are encoded in the returned state (the `"Error"`
//! sentinel); nothing here panics or returns `Err`.

use super::action::{Action, Operator, ScientificFn};
use super::history::HistoryEntry;
use super::state::{CalculatorState, ERROR_DISPLAY};
use crate::arith::{self, ArithError};

/// What a single step did, for callers that log or react to it.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The state changed (or was reset) without evaluating.
    Updated,

    /// The input was not applicable and the state is unchanged.
    Ignored,

    /// Evaluation succeeded and `entry` was recorded in history.
    Evaluated(HistoryEntry),

    /// Evaluation failed; the display shows the error sentinel.
    Failed(ArithError),
}

impl CalculatorState {
    /// Apply an action, discarding the outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use novacalc::core::{Action, CalculatorState, Operator};
    ///
    /// let state = [
    ///     Action::Digit('3'),
    ///     Action::Operator(Operator::Add),
    ///     Action::Digit('2'),
    ///     Action::Evaluate,
    /// ]
    /// .iter()
    /// .fold(CalculatorState::new(), |state, action| state.apply(action));
    ///
    /// assert_eq!(state.display(), "5");
    /// assert_eq!(state.history().latest().unwrap().expression, "3 + 2");
    /// ```
    pub fn apply(&self, action: &Action) -> Self {
        self.step(action).0
    }

    /// Apply an action and report what happened.
    pub fn step(&self, action: &Action) -> (Self, StepOutcome) {
        match action {
            Action::Digit(d) => match self.try_enter_digit(*d) {
                Some(next) => (next, StepOutcome::Updated),
                None => (self.clone(), StepOutcome::Ignored),
            },
            Action::Operator(op) => (self.enter_operator(*op), StepOutcome::Updated),
            Action::Evaluate => self.evaluate_with_outcome(),
            Action::Scientific(f) => (self.apply_scientific(*f), StepOutcome::Updated),
            Action::Delete => (self.delete_last(), StepOutcome::Updated),
            Action::Clear => (self.clear(), StepOutcome::Updated),
        }
    }

    /// Enter a digit (`'0'..='9'`) or decimal point.
    ///
    /// After a result (or an error) the digit starts a fresh operand.
    /// A second decimal point in the same operand, or any other character,
    /// leaves the state unchanged.
    pub fn enter_digit(&self, digit: char) -> Self {
        self.try_enter_digit(digit)
            .unwrap_or_else(|| self.clone())
    }

    fn try_enter_digit(&self, digit: char) -> Option<Self> {
        if !digit.is_ascii_digit() && digit != '.' {
            return None;
        }

        let mut next = self.clone();

        if self.last_result.is_some() {
            next.display = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            next.last_result = None;
            return Some(next);
        }

        if digit == '.' {
            if self.display.contains('.') {
                return None;
            }
            next.display.push('.');
        } else if self.display == "0" {
            next.display = digit.to_string();
        } else {
            next.display.push(digit);
        }

        Some(next)
    }

    /// Start a binary operation with the current display as left operand.
    ///
    /// Replaces any pending expression; only one operator is tracked.
    pub fn enter_operator(&self, op: Operator) -> Self {
        Self {
            expression: format!("{} {} ", self.display, op.glyph()),
            display: "0".to_string(),
            last_result: None,
            history: self.history.clone(),
        }
    }

    /// Evaluate `expression + display`.
    ///
    /// On success the result is shown, recorded in history, and the pending
    /// expression cleared. On failure the display shows `"Error"` and the
    /// pending expression is kept.
    pub fn evaluate(&self) -> Self {
        self.evaluate_with_outcome().0
    }

    fn evaluate_with_outcome(&self) -> (Self, StepOutcome) {
        let text = format!("{}{}", self.expression, self.display);

        match arith::evaluate(&text) {
            Ok(value) => {
                let result = arith::format_result(value);
                let entry = HistoryEntry::new(text, result.clone());
                let next = Self {
                    display: result.clone(),
                    expression: String::new(),
                    last_result: Some(result),
                    history: self.history.record(entry.clone()),
                };
                (next, StepOutcome::Evaluated(entry))
            }
            Err(err) => {
                let next = Self {
                    display: ERROR_DISPLAY.to_string(),
                    expression: self.expression.clone(),
                    last_result: Some(ERROR_DISPLAY.to_string()),
                    history: self.history.clone(),
                };
                (next, StepOutcome::Failed(err))
            }
        }
    }

    /// Apply a unary function to the display value (constants ignore it).
    ///
    /// Domain errors are shown as `NaN` / `Infinity` / `-Infinity`.
    pub fn apply_scientific(&self, f: ScientificFn) -> Self {
        let input = if f.is_constant() {
            0.0
        } else {
            arith::parse_leading_number(&self.display)
        };
        let result = arith::format_result(f.apply(input));

        Self {
            display: result.clone(),
            expression: self.expression.clone(),
            last_result: Some(result),
            history: self.history.clone(),
        }
    }

    /// Remove the last character of the display.
    ///
    /// Falls back to `"0"` when nothing numeric would remain, which also
    /// clears the error sentinel and non-finite displays.
    pub fn delete_last(&self) -> Self {
        let mut display = self.display.clone();

        if is_numeric_literal(&display) {
            display.pop();
        } else {
            display.clear();
        }
        if display.is_empty() || display == "-" {
            display = "0".to_string();
        }

        Self {
            display,
            expression: self.expression.clone(),
            last_result: self.last_result.clone(),
            history: self.history.clone(),
        }
    }

    /// Reset display, pending expression and last result. History is kept.
    pub fn clear(&self) -> Self {
        Self {
            history: self.history.clone(),
            ..Self::new()
        }
    }
}

fn is_numeric_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}
