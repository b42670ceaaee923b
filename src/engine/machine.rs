//! The calculator engine.
//!
//! `Calculator` is the imperative shell: it owns the input history,
//! dispatches each key event over the transition table, and triggers the
//! display effects. Failed evaluations are logged and swallowed; no event
//! ever panics or returns an error across this boundary, so rapid or
//! out-of-order key presses can never corrupt state.

use crate::core::{EntryState, InputHistory, Operator};
use crate::engine::display::DisplaySink;
use crate::engine::event::KeyEvent;
use tracing::{debug, warn};

/// Session-scoped engine over an embedder-supplied display sink.
///
/// See the crate-level example for a full keypad round trip.
pub struct Calculator<D: DisplaySink> {
    history: InputHistory,
    display: D,
}

impl<D: DisplaySink> Calculator<D> {
    /// Create an engine with an empty history.
    pub fn new(display: D) -> Self {
        Self {
            history: InputHistory::new(),
            display,
        }
    }

    /// The current input history.
    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    /// The state the history currently ends in.
    pub fn state(&self) -> EntryState {
        self.history.state()
    }

    /// The display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The display sink, mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consume the engine and hand the sink back.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Handle one key press to completion.
    ///
    /// Precondition failures (the wrong trailing token kind for the
    /// requested action) are no-ops per the transition table; evaluation
    /// aborts are logged only.
    pub fn press(&mut self, event: KeyEvent) {
        debug!("handling {:?} in state {}", event, self.history.state().name());
        match event {
            KeyEvent::ClearAll => self.clear(),
            KeyEvent::Backspace => self.apply(self.history.remove_last()),
            KeyEvent::PercentToDecimal => self.apply(self.history.percent_last()),
            KeyEvent::InsertNumber(text) => self.apply(self.history.insert_digit(&text)),
            KeyEvent::InsertOperator(symbol) => self.insert_operator(&symbol),
            KeyEvent::Negate => self.apply(self.history.negate_last()),
            KeyEvent::InsertDecimal => self.apply(self.history.insert_decimal_point()),
            KeyEvent::Evaluate => self.evaluate(),
        }
    }

    fn clear(&mut self) {
        self.history = InputHistory::new();
        self.display.render_history(&self.history.joined());
        self.display.render_result("0");
    }

    fn insert_operator(&mut self, symbol: &str) {
        let Some(op) = Operator::from_symbol(symbol) else {
            warn!("ignoring unknown operator symbol: {:?}", symbol);
            return;
        };
        if self.history.state().is_settled() {
            // Continue from the displayed result. The clear comes first, so
            // the result pane drops back to "0" until the next evaluation.
            let seed = self.display.last_result();
            self.clear();
            self.history = InputHistory::chain_from(&seed, op);
            self.display.render_history(&self.history.joined());
        } else {
            self.apply(self.history.insert_operator(op));
        }
    }

    fn evaluate(&mut self) {
        if self.history.state() != EntryState::EndsInNumber {
            debug!("evaluate ignored in state {}", self.history.state().name());
            return;
        }
        match self.history.evaluate() {
            Ok((settled, value)) => {
                self.history = settled;
                self.display.render_history(&self.history.joined());
                self.display.render_result(&value.to_string());
            }
            Err(error) => warn!("evaluation aborted: {}", error),
        }
    }

    fn apply(&mut self, next: Option<InputHistory>) {
        if let Some(history) = next {
            self.history = history;
            self.display.render_history(&self.history.joined());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every display call, the mock-environment way.
    #[derive(Default)]
    struct RecordingDisplay {
        history_frames: Vec<String>,
        result_frames: Vec<String>,
    }

    impl DisplaySink for RecordingDisplay {
        fn render_history(&mut self, text: &str) {
            self.history_frames.push(text.to_string());
        }

        fn render_result(&mut self, text: &str) {
            self.result_frames.push(text.to_string());
        }

        fn last_result(&self) -> String {
            self.result_frames
                .last()
                .cloned()
                .unwrap_or_else(|| "0".to_string())
        }
    }

    fn engine() -> Calculator<RecordingDisplay> {
        Calculator::new(RecordingDisplay::default())
    }

    fn press_keys(calculator: &mut Calculator<RecordingDisplay>, keys: &[&str]) {
        for key in keys {
            let event = match *key {
                "=" => KeyEvent::Evaluate,
                "+" | "-" | "×" | "÷" => KeyEvent::InsertOperator(key.to_string()),
                "." => KeyEvent::InsertDecimal,
                _ => KeyEvent::InsertNumber(key.to_string()),
            };
            calculator.press(event);
        }
    }

    #[test]
    fn clear_renders_empty_history_and_zero_result() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["4", "2"]);
        calculator.press(KeyEvent::ClearAll);

        let display = calculator.display();
        assert_eq!(display.history_frames.last().map(String::as_str), Some(""));
        assert_eq!(display.result_frames.last().map(String::as_str), Some("0"));
        assert_eq!(calculator.state(), EntryState::Empty);
    }

    #[test]
    fn history_renders_after_every_mutating_press() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["2", "5", "+", "1"]);
        assert_eq!(
            calculator.display().history_frames,
            vec!["2", "25", "25 +", "25 + 1"]
        );
    }

    #[test]
    fn evaluation_emits_the_result_and_settles_the_history() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["2", "5", "+", "1", "5", "="]);

        let display = calculator.display();
        assert_eq!(display.result_frames, vec!["40"]);
        assert_eq!(
            display.history_frames.last().map(String::as_str),
            Some("25 + 15 =")
        );
        assert!(calculator.state().is_settled());
    }

    #[test]
    fn fold_has_no_operator_precedence() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["2", "+", "3", "×", "4", "="]);
        assert_eq!(calculator.display().result_frames, vec!["20"]);
    }

    #[test]
    fn division_by_zero_leaves_history_and_result_untouched() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["8", "÷", "0", "="]);

        let display = calculator.display();
        assert!(display.result_frames.is_empty());
        assert_eq!(display.history_frames.last().map(String::as_str), Some("8 ÷ 0"));
        assert_eq!(calculator.state(), EntryState::EndsInNumber);
    }

    #[test]
    fn evaluate_after_operator_is_silently_ignored() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["5", "+", "="]);

        let display = calculator.display();
        assert!(display.result_frames.is_empty());
        assert_eq!(display.history_frames.last().map(String::as_str), Some("5 +"));
    }

    #[test]
    fn evaluate_on_empty_history_is_silently_ignored() {
        let mut calculator = engine();
        calculator.press(KeyEvent::Evaluate);
        assert!(calculator.display().history_frames.is_empty());
        assert!(calculator.display().result_frames.is_empty());
    }

    #[test]
    fn digit_after_result_does_nothing() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["2", "+", "3", "="]);
        let frames_before = calculator.display().history_frames.len();

        calculator.press(KeyEvent::InsertNumber("9".to_string()));

        assert_eq!(calculator.display().history_frames.len(), frames_before);
        assert_eq!(calculator.history().joined(), "2 + 3 =");
    }

    #[test]
    fn operator_after_result_chains_from_the_displayed_value() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["2", "5", "+", "1", "5", "="]);
        calculator.press(KeyEvent::InsertOperator("×".to_string()));

        let display = calculator.display();
        // the chain clears first, so the result pane resets to "0"
        assert_eq!(display.result_frames.last().map(String::as_str), Some("0"));
        assert_eq!(display.history_frames.last().map(String::as_str), Some("40 ×"));
        assert_eq!(calculator.state(), EntryState::EndsInOperator);

        press_keys(&mut calculator, &["2", "="]);
        assert_eq!(
            calculator.display().result_frames.last().map(String::as_str),
            Some("80")
        );
    }

    #[test]
    fn unknown_operator_symbols_are_ignored() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["5"]);
        calculator.press(KeyEvent::InsertOperator("*".to_string()));

        assert_eq!(calculator.history().joined(), "5");
        assert_eq!(calculator.display().history_frames, vec!["5"]);
    }

    #[test]
    fn backspace_walks_back_to_empty_and_stays_there() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["1", "2", "+"]);
        for _ in 0..5 {
            calculator.press(KeyEvent::Backspace);
        }
        assert_eq!(calculator.state(), EntryState::Empty);
        assert_eq!(
            calculator.display().history_frames,
            vec!["1", "12", "12 +", "12", "1", ""]
        );
    }

    #[test]
    fn percent_and_negate_drive_the_display() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["5", "0"]);
        calculator.press(KeyEvent::PercentToDecimal);
        calculator.press(KeyEvent::PercentToDecimal);
        calculator.press(KeyEvent::Negate);

        assert_eq!(
            calculator.display().history_frames,
            vec!["5", "50", "0.5", "0.005", "-0.005"]
        );
    }

    #[test]
    fn decimal_key_seeds_zero_after_an_operator() {
        let mut calculator = engine();
        press_keys(&mut calculator, &["5", "+", "."]);
        assert_eq!(calculator.history().joined(), "5 + 0");
    }
}
