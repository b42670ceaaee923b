//! Input tokens and the operator alphabet.
//!
//! Tokens are immutable values: editing the history replaces a token with
//! a rebuilt one, it never mutates one in place.

use super::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a single history entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Operator,
    Equals,
}

/// One unit of input history: a number literal being typed, an operator,
/// or the `=` marker that settles an expression.
///
/// # Example
///
/// ```rust
/// use reckoner::{Operator, Token, TokenKind};
///
/// let token = Token::number("25");
/// assert_eq!(token.kind, TokenKind::Number);
/// assert_eq!(token.text, "25");
///
/// let token = Token::operator(Operator::Divide);
/// assert_eq!(token.text, "÷");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Token {
    /// What kind of entry this is
    pub kind: TokenKind,
    /// The display text, exactly as it accumulates on screen
    pub text: String,
}

impl Token {
    /// A number token with the given text.
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
        }
    }

    /// An operator token carrying the operator's display symbol.
    pub fn operator(op: Operator) -> Self {
        Self {
            kind: TokenKind::Operator,
            text: op.symbol().to_string(),
        }
    }

    /// The `=` marker appended by a successful evaluation.
    pub fn equals() -> Self {
        Self {
            kind: TokenKind::Equals,
            text: "=".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The four arithmetic operators, mapped to the keypad symbols `+ - × ÷`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse a keypad symbol. Returns `None` for anything outside the
    /// `+ - × ÷` alphabet.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The display symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to a running result and the next operand.
    ///
    /// Division with a zero right operand is the one arithmetic error;
    /// everything else is plain `f64` arithmetic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::{EvalError, Operator};
    ///
    /// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
    /// assert_eq!(Operator::Divide.apply(8.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
