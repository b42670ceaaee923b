//! Reckoner: a left-to-right calculator input engine
//!
//! Reckoner keeps the input history of a keypad calculator and evaluates it
//! on demand, strictly left to right (no operator precedence). It is built
//! on a "pure core, imperative shell" split: the token model, the explicit
//! entry-state machine, and the expression fold are pure functions with no
//! side effects, while display effects are isolated behind the
//! [`DisplaySink`] trait the embedder implements.
//!
//! # Core Concepts
//!
//! - **Token**: one unit of input history (a number literal, an operator,
//!   or the `=` marker)
//! - **EntryState**: explicit enum describing where the history currently
//!   ends; every key press dispatches over it
//! - **InputHistory**: the ordered token sequence with pure transition
//!   operations
//! - **Calculator**: the shell that receives [`KeyEvent`]s and drives the
//!   display sink
//!
//! # Example
//!
//! ```rust
//! use reckoner::{Calculator, DisplaySink, KeyEvent};
//!
//! #[derive(Default)]
//! struct Screen {
//!     history: String,
//!     result: String,
//! }
//!
//! impl DisplaySink for Screen {
//!     fn render_history(&mut self, text: &str) {
//!         self.history = text.to_string();
//!     }
//!
//!     fn render_result(&mut self, text: &str) {
//!         self.result = text.to_string();
//!     }
//!
//!     fn last_result(&self) -> String {
//!         self.result.clone()
//!     }
//! }
//!
//! let mut calculator = Calculator::new(Screen::default());
//! for key in ["2", "5"] {
//!     calculator.press(KeyEvent::InsertNumber(key.into()));
//! }
//! calculator.press(KeyEvent::InsertOperator("+".into()));
//! calculator.press(KeyEvent::InsertNumber("15".into()));
//! calculator.press(KeyEvent::Evaluate);
//!
//! assert_eq!(calculator.display().history, "25 + 15 =");
//! assert_eq!(calculator.display().result, "40");
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{EntryState, EvalError, InputHistory, Operator, Token, TokenKind};
pub use engine::{Calculator, DisplaySink, KeyEvent};
