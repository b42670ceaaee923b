//! Inbound key events.

use serde::{Deserialize, Serialize};

/// One user action, with its payload where applicable.
///
/// `InsertNumber` carries a digit or digit-group string; `InsertOperator`
/// carries one of the keypad symbols `+ - × ÷`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum KeyEvent {
    ClearAll,
    Backspace,
    PercentToDecimal,
    InsertNumber(String),
    InsertOperator(String),
    Negate,
    InsertDecimal,
    Evaluate,
}
