//! Evaluation abort reasons.

use thiserror::Error;

/// Why an expression fold gave up.
///
/// Every variant is non-fatal: the engine logs it and leaves the history
/// and the displayed result untouched. Nothing here crosses the
/// [`crate::engine::DisplaySink`] boundary.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("expression needs at least one operator and two operands")]
    Incomplete,

    #[error("operand `{0}` is not a number")]
    InvalidOperand(String),

    #[error("`{0}` is not a recognized operator")]
    UnknownOperator(String),

    #[error("division by zero")]
    DivisionByZero,
}
