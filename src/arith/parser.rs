//! Precedence-climbing parser and evaluator.
//!
//! Grammar (no parentheses):
//!
//! ```text
//! expr   := unary (binop unary)*
//! unary  := ('+' | '-') unary | NUMBER
//! binop  := '+' | '-' | '*' | '/' | '%'
//! ```
//!
//! `*`, `/` and `%` bind tighter than `+` and `-`; operators of equal
//! precedence associate to the left.

use super::error::ArithError;
use super::lexer::Token;

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Percent => Some(Self::Rem),
            Token::Number(_) => None,
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            // f64 `%` truncates toward zero, result takes the dividend's sign
            Self::Rem => lhs % rhs,
        }
    }
}

/// Parsed expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate with IEEE-754 semantics. Never fails; callers decide what
    /// to do with non-finite values.
    pub fn eval(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Neg(inner) => -inner.eval(),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
        }
    }
}

/// Parse a token stream into an expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, ArithError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression(1)?;

    match parser.peek() {
        Some(token) => Err(ArithError::UnexpectedToken {
            found: token.clone(),
        }),
        None => Ok(expr),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Expr, ArithError> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.peek().and_then(BinaryOp::from_token) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.pos += 1;

            let rhs = self.expression(precedence + 1)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ArithError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Number(*n)),
            Some(Token::Minus) => Ok(Expr::Neg(Box::new(self.unary()?))),
            Some(Token::Plus) => self.unary(),
            Some(other) => Err(ArithError::UnexpectedToken {
                found: other.clone(),
            }),
            None => Err(ArithError::UnexpectedEnd),
        }
    }
}
