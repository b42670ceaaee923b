//! The input history and its pure transition operations.
//!
//! `InputHistory` is the one piece of state the calculator owns: an ordered
//! token sequence plus the explicit [`EntryState`] it currently ends in.
//! Invariants, all enforced by the transition rules rather than post-hoc
//! validation:
//!
//! - at most one trailing `=` token, always last when present
//! - number and operator tokens strictly alternate while an expression is
//!   being built
//! - the stored state always matches the kind of the last token
//!
//! Every operation is pure: it returns a new history (`None` marks the
//! documented no-ops) and leaves the receiver untouched.

use super::error::EvalError;
use super::eval::fold_expression;
use super::state::EntryState;
use super::token::{Operator, Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Ordered sequence of input tokens, insertion order = display order.
///
/// # Example
///
/// ```rust
/// use reckoner::InputHistory;
///
/// let history = InputHistory::new()
///     .insert_digit("2").unwrap()
///     .insert_digit("5").unwrap();
///
/// assert_eq!(history.joined(), "25");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InputHistory {
    tokens: Vec<Token>,
    state: EntryState,
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            state: EntryState::Empty,
        }
    }

    /// Start a fresh history from a previous result: exactly
    /// `[Number(result), Operator(op)]`.
    ///
    /// This is the chaining path: an operator pressed on a settled history
    /// continues the computation from the displayed result. The caller
    /// supplies that result with any grouping separators already stripped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::{InputHistory, Operator};
    ///
    /// let history = InputHistory::chain_from("40", Operator::Multiply);
    /// assert_eq!(history.joined(), "40 ×");
    /// ```
    pub fn chain_from(result: &str, op: Operator) -> Self {
        Self::new()
            .with_pushed(Token::number(result))
            .with_pushed(Token::operator(op))
    }

    /// The explicit state the history ends in.
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// All tokens in display order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token texts joined with single spaces, the history-line text handed
    /// to the display. Empty history joins to `""`.
    pub fn joined(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Insert a digit or digit-group string.
    ///
    /// - ends in a number: the text is appended to it (string
    ///   concatenation, so multi-digit numbers build up key by key)
    /// - ends in an operator, or empty: a new number token is started
    /// - settled: no-op (a digit right after a result does nothing)
    pub fn insert_digit(&self, text: &str) -> Option<Self> {
        match self.state {
            EntryState::EndsInNumber => {
                let last = self.last_token()?;
                let mut grown = last.text.clone();
                grown.push_str(text);
                Some(self.with_replaced_last(Token::number(grown)))
            }
            EntryState::EndsInOperator | EntryState::Empty => {
                Some(self.with_pushed(Token::number(text)))
            }
            EntryState::Settled => None,
        }
    }

    /// Insert an operator.
    ///
    /// - ends in a number: the operator is pushed
    /// - ends in an operator: the previous choice is replaced (only the
    ///   most recent operator applies)
    /// - empty: no-op
    /// - settled: no-op here; the shell routes this case through
    ///   [`InputHistory::chain_from`] because it needs the externally
    ///   displayed result
    pub fn insert_operator(&self, op: Operator) -> Option<Self> {
        match self.state {
            EntryState::EndsInNumber => Some(self.with_pushed(Token::operator(op))),
            EntryState::EndsInOperator => Some(self.with_replaced_last(Token::operator(op))),
            EntryState::Empty | EntryState::Settled => None,
        }
    }

    /// Insert a decimal point.
    ///
    /// - ends in a number without a `.`: append one
    /// - ends in a number that already has a `.`: no-op
    /// - ends in an operator, or empty: seed a `0` number token, with no
    ///   `.` appended
    /// - settled: no-op
    pub fn insert_decimal_point(&self) -> Option<Self> {
        match self.state {
            EntryState::EndsInNumber => {
                let last = self.last_token()?;
                if last.text.contains('.') {
                    return None;
                }
                let mut grown = last.text.clone();
                grown.push('.');
                Some(self.with_replaced_last(Token::number(grown)))
            }
            EntryState::EndsInOperator | EntryState::Empty => {
                Some(self.with_pushed(Token::number("0")))
            }
            EntryState::Settled => None,
        }
    }

    /// Divide the trailing number by 100 (the percent key).
    ///
    /// Pressing percent repeatedly keeps dividing: `50` becomes `0.5`,
    /// then `0.005`. No-op unless the history ends in a number.
    pub fn percent_last(&self) -> Option<Self> {
        let value = self.last_number_value()?;
        Some(self.with_replaced_last(Token::number((value / 100.0).to_string())))
    }

    /// Negate the trailing number. No-op unless the history ends in one.
    pub fn negate_last(&self) -> Option<Self> {
        let value = self.last_number_value()?;
        Some(self.with_replaced_last(Token::number((value * -1.0).to_string())))
    }

    /// Undo the trailing edit (the backspace key).
    ///
    /// - ends in a number longer than one character: drop the last
    ///   character
    /// - ends in a one-character number, or an operator: remove the token
    /// - empty or settled: no-op
    pub fn remove_last(&self) -> Option<Self> {
        match self.state {
            EntryState::EndsInNumber => {
                let last = self.last_token()?;
                if last.text.chars().count() > 1 {
                    let mut trimmed = last.text.clone();
                    trimmed.pop();
                    Some(self.with_replaced_last(Token::number(trimmed)))
                } else {
                    Some(self.with_popped())
                }
            }
            EntryState::EndsInOperator => Some(self.with_popped()),
            EntryState::Empty | EntryState::Settled => None,
        }
    }

    /// Evaluate the expression, strictly left to right.
    ///
    /// On success returns the settled history (this one plus a trailing
    /// `=`) and the fold result. On failure the error names the abort
    /// reason and the history is left to the caller unchanged.
    ///
    /// The shell only calls this when the history ends in a number; the
    /// function itself is total and folds whatever it is given (an empty
    /// or too-short expression aborts as [`EvalError::Incomplete`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::{InputHistory, Operator};
    ///
    /// // 2 + 3 × 4 folds as (2 + 3) × 4, no precedence
    /// let history = InputHistory::new()
    ///     .insert_digit("2").unwrap()
    ///     .insert_operator(Operator::Add).unwrap()
    ///     .insert_digit("3").unwrap()
    ///     .insert_operator(Operator::Multiply).unwrap()
    ///     .insert_digit("4").unwrap();
    ///
    /// let (settled, value) = history.evaluate().unwrap();
    /// assert_eq!(value, 20.0);
    /// assert_eq!(settled.joined(), "2 + 3 × 4 =");
    /// ```
    pub fn evaluate(&self) -> Result<(Self, f64), EvalError> {
        let value = fold_expression(&self.concatenated())?;
        Ok((self.with_pushed(Token::equals()), value))
    }

    /// Token texts run together with no separator, the form the fold
    /// re-tokenizes.
    fn concatenated(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// The trailing number parsed as `f64`, if the history ends in a
    /// number token that parses. Texts built through the transitions above
    /// always do; anything else falls through to the no-op path.
    fn last_number_value(&self) -> Option<f64> {
        let last = self.last_token()?;
        if last.kind != TokenKind::Number {
            return None;
        }
        last.text.parse().ok()
    }

    fn with_pushed(&self, token: Token) -> Self {
        let mut tokens = self.tokens.clone();
        let state = EntryState::after(token.kind);
        tokens.push(token);
        Self { tokens, state }
    }

    fn with_replaced_last(&self, token: Token) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.pop();
        let state = EntryState::after(token.kind);
        tokens.push(token);
        Self { tokens, state }
    }

    fn with_popped(&self) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.pop();
        let state = tokens
            .last()
            .map(|token| EntryState::after(token.kind))
            .unwrap_or(EntryState::Empty);
        Self { tokens, state }
    }
}
