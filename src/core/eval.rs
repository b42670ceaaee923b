//! The left-to-right expression fold.
//!
//! History tokens store numbers and operators as separately typed entries,
//! so evaluation first runs the token texts together and re-splits the
//! result with a single regex into a clean operand/operator stream. The
//! stream is then folded strictly left to right: `2 + 3 × 4` is
//! `(2 + 3) × 4 = 20`, never 14.
//!
//! One consequence of the re-split is that a negated operand such as `-3`
//! comes back as two pieces, `-` and `3`, and the fold aborts on the bare
//! `-`.

use super::error::EvalError;
use super::token::Operator;
use once_cell::sync::Lazy;
use regex::Regex;

/// A number with an optional decimal part, or one operator symbol.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?|[+\-×÷]").expect("token pattern is valid"));

/// Fold a concatenated expression string into a single value.
///
/// Fewer than three recovered tokens (not even `operand operator operand`)
/// abort as [`EvalError::Incomplete`]; unparseable operands and division
/// by zero abort the whole fold with nothing partially applied.
///
/// # Example
///
/// ```rust
/// use reckoner::core::fold_expression;
///
/// assert_eq!(fold_expression("2+3×4"), Ok(20.0));
/// assert!(fold_expression("8÷0").is_err());
/// ```
pub fn fold_expression(expression: &str) -> Result<f64, EvalError> {
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(expression)
        .map(|m| m.as_str())
        .collect();

    if tokens.len() < 3 {
        return Err(EvalError::Incomplete);
    }

    let mut result = parse_operand(tokens[0])?;
    let mut index = 1;
    while index < tokens.len() {
        // operand is checked before the operator symbol
        let operand = match tokens.get(index + 1) {
            Some(text) => parse_operand(text)?,
            None => return Err(EvalError::Incomplete),
        };
        let symbol = tokens[index];
        let operator = Operator::from_symbol(symbol)
            .ok_or_else(|| EvalError::UnknownOperator(symbol.to_string()))?;
        result = operator.apply(result, operand)?;
        index += 2;
    }

    Ok(result)
}

fn parse_operand(text: &str) -> Result<f64, EvalError> {
    text.parse()
        .map_err(|_| EvalError::InvalidOperand(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_strictly_left_to_right() {
        assert_eq!(fold_expression("2+3×4"), Ok(20.0));
        assert_eq!(fold_expression("10-4-3"), Ok(3.0));
        assert_eq!(fold_expression("100÷4×2"), Ok(50.0));
    }

    #[test]
    fn folds_each_operator() {
        assert_eq!(fold_expression("25+15"), Ok(40.0));
        assert_eq!(fold_expression("25-15"), Ok(10.0));
        assert_eq!(fold_expression("25×15"), Ok(375.0));
        assert_eq!(fold_expression("7÷2"), Ok(3.5));
    }

    #[test]
    fn folds_decimal_operands() {
        assert_eq!(fold_expression("1.5+2.25"), Ok(3.75));
    }

    #[test]
    fn too_few_tokens_abort_as_incomplete() {
        assert_eq!(fold_expression(""), Err(EvalError::Incomplete));
        assert_eq!(fold_expression("5"), Err(EvalError::Incomplete));
        assert_eq!(fold_expression("5+"), Err(EvalError::Incomplete));
    }

    #[test]
    fn trailing_operator_aborts_as_incomplete() {
        assert_eq!(fold_expression("5+3×"), Err(EvalError::Incomplete));
    }

    #[test]
    fn division_by_zero_aborts_the_whole_fold() {
        assert_eq!(fold_expression("8÷0"), Err(EvalError::DivisionByZero));
        // abort even when the division is mid-stream
        assert_eq!(fold_expression("8÷0+5"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn leading_negation_aborts_on_the_bare_sign() {
        assert_eq!(
            fold_expression("-5+3"),
            Err(EvalError::InvalidOperand("-".to_string()))
        );
    }

    #[test]
    fn negated_right_operand_aborts() {
        assert_eq!(
            fold_expression("5+-3"),
            Err(EvalError::InvalidOperand("-".to_string()))
        );
    }
}
