//! Explicit entry state for the input history.
//!
//! "What kind of token is last" is an explicit enum stored next to the
//! tokens, never re-derived by inspecting the sequence, so every
//! transition is an exhaustive `match` over it.

use super::token::TokenKind;
use serde::{Deserialize, Serialize};

/// Where the input history currently ends.
///
/// # Example
///
/// ```rust
/// use reckoner::{EntryState, InputHistory};
///
/// let history = InputHistory::new();
/// assert_eq!(history.state(), EntryState::Empty);
///
/// let history = history.insert_digit("7").unwrap();
/// assert_eq!(history.state(), EntryState::EndsInNumber);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EntryState {
    /// No tokens yet (initial or cleared)
    Empty,
    /// Last token is a number still open for editing
    EndsInNumber,
    /// Last token is an operator awaiting its right operand
    EndsInOperator,
    /// History ends in `=`: the expression has been evaluated
    Settled,
}

impl EntryState {
    /// The state's name for log lines.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::EndsInNumber => "EndsInNumber",
            Self::EndsInOperator => "EndsInOperator",
            Self::Settled => "Settled",
        }
    }

    /// Whether the history has been settled by a successful evaluation.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// The state a history ends in after the given token kind.
    pub(crate) fn after(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Number => Self::EndsInNumber,
            TokenKind::Operator => Self::EndsInOperator,
            TokenKind::Equals => Self::Settled,
        }
    }
}
