//! Tokenizer for calculator expressions.
//!
//! Accepts ASCII operators only; display glyphs (`×`, `÷`) must be
//! normalized first with [`normalize_glyphs`].

use super::error::ArithError;
use std::fmt;

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
        }
    }
}

/// Replace the display glyphs for multiplication and division with their
/// ASCII operators.
pub fn normalize_glyphs(text: &str) -> String {
    text.replace('×', "*").replace('÷', "/")
}

/// Split `input` into tokens.
///
/// Numbers are runs of digits with at most one decimal point (`5.`, `.5`
/// and `12.75` are valid, `.` and `1.2.3` are not). Whitespace is skipped.
/// Error positions are byte offsets into `input`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ArithError> {
    let mut chars = input.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            c if is_number_char(c) => {
                let mut literal = String::from(c);
                while let Some((_, next)) = chars.next_if(|&(_, next)| is_number_char(next)) {
                    literal.push(next);
                }
                Token::Number(parse_literal(&literal)?)
            }
            found => return Err(ArithError::UnexpectedChar { found, position }),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn parse_literal(literal: &str) -> Result<f64, ArithError> {
    let malformed = || ArithError::MalformedNumber {
        literal: literal.to_string(),
    };

    if literal.matches('.').count() > 1 || !literal.chars().any(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    // "5." and ".5" are both accepted
    let mut normalized = String::with_capacity(literal.len() + 2);
    if literal.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(literal.trim_end_matches('.'));

    normalized.parse::<f64>().map_err(|_| malformed())
}
