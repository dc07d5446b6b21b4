//! Arithmetic for the expression engine.
//!
//! A small, explicit evaluator for `+ - * / %` with standard precedence,
//! unary signs and no parentheses. Input text is user controlled, so it is
//! only ever tokenized and parsed here, never executed.

mod error;
mod format;
mod lexer;
mod parser;

pub use error::ArithError;
pub use format::{format_result, parse_leading_number, round_result, RESULT_DECIMALS};
pub use lexer::{normalize_glyphs, tokenize, Token};
pub use parser::{parse, BinaryOp, Expr};

/// Evaluate an expression written with display glyphs (`×`, `÷`) or
/// ASCII operators.
///
/// Fails on lexing or parsing errors and when the result is NaN or
/// infinite.
///
/// # Example
///
/// ```rust
/// use novacalc::arith::{evaluate, ArithError};
///
/// assert_eq!(evaluate("2 + 3 × 4"), Ok(14.0));
/// assert!(matches!(evaluate("5 ÷ 0"), Err(ArithError::NonFinite { .. })));
/// ```
pub fn evaluate(text: &str) -> Result<f64, ArithError> {
    let normalized = normalize_glyphs(text);
    let tokens = tokenize(&normalized)?;
    let value = parse(&tokens)?.eval();

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithError::NonFinite { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_display_glyphs() {
        assert_eq!(evaluate("6 × 7"), Ok(42.0));
        assert_eq!(evaluate("9 ÷ 3"), Ok(3.0));
        assert_eq!(evaluate("9 % 4"), Ok(1.0));
    }

    #[test]
    fn non_finite_results_fail() {
        assert!(matches!(
            evaluate("5 ÷ 0"),
            Err(ArithError::NonFinite { .. })
        ));
        assert!(matches!(
            evaluate("0 ÷ 0"),
            Err(ArithError::NonFinite { .. })
        ));
        assert!(matches!(
            evaluate("5 % 0"),
            Err(ArithError::NonFinite { .. })
        ));
    }

    #[test]
    fn malformed_text_fails() {
        assert!(evaluate("1.2.3 + 1").is_err());
        assert!(evaluate("Error + 1").is_err());
        assert!(evaluate("3 + ").is_err());
    }
}
