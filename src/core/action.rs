//! User actions accepted by the expression engine.

use serde::{Deserialize, Serialize};
use std::f64::consts;

/// Binary operator with its display glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// Glyph used in the rendered expression.
    pub fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Percent => '%',
        }
    }
}

/// Unary scientific function or constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Square,
    Pi,
    E,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 9] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Square,
        Self::Pi,
        Self::E,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Square => "pow2",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Constants ignore their input.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// Apply with plain IEEE-754 semantics: domain errors yield NaN or an
    /// infinity rather than failing. Angles are in radians.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Sqrt => x.sqrt(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Square => x.powi(2),
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

/// A single user input to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// `'0'..='9'` or `'.'`
    Digit(char),
    Operator(Operator),
    Evaluate,
    Scientific(ScientificFn),
    Delete,
    Clear,
}

impl Action {
    /// Map a keyboard key name to an action.
    ///
    /// # Example
    ///
    /// ```rust
    /// use novacalc::core::{Action, Operator};
    ///
    /// assert_eq!(Action::from_key("7"), Some(Action::Digit('7')));
    /// assert_eq!(Action::from_key("*"), Some(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Evaluate));
    /// assert_eq!(Action::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Evaluate),
            "Backspace" => Some(Self::Delete),
            "Escape" => Some(Self::Clear),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Self::Digit(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn is_scientific(&self) -> bool {
        matches!(self, Self::Scientific(_))
    }
}

/// Calculator mode selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Standard,
    Scientific,
    AiSolver,
}

impl Mode {
    pub fn name(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::Scientific => "Scientific",
            Self::AiSolver => "AI Solver",
        }
    }

    /// Whether this mode offers `action` to the user.
    ///
    /// The engine accepts every action regardless; this is for the input
    /// layer deciding what to show and which keys to route.
    pub fn offers(&self, action: &Action) -> bool {
        match self {
            Self::Standard => !action.is_scientific(),
            Self::Scientific => true,
            Self::AiSolver => false,
        }
    }
}
