//! Result Chaining
//!
//! Shows an operator press on a settled history continuing the computation
//! from the previous result: 25 + 15 = 40, then × 2 = 80.
//!
//! Run with: cargo run --example result_chaining

use reckoner::{Calculator, DisplaySink, KeyEvent};

#[derive(Default)]
struct Console {
    result: String,
}

impl DisplaySink for Console {
    fn render_history(&mut self, text: &str) {
        println!("history | {text}");
    }

    fn render_result(&mut self, text: &str) {
        self.result = text.to_string();
        println!(" result | {text}");
    }

    fn last_result(&self) -> String {
        self.result.clone()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("=== Result Chaining Example ===\n");

    let mut calculator = Calculator::new(Console::default());
    let keys = [
        KeyEvent::InsertNumber("25".into()),
        KeyEvent::InsertOperator("+".into()),
        KeyEvent::InsertNumber("15".into()),
        KeyEvent::Evaluate,
        // the next operator picks the 40 back up as the first operand
        KeyEvent::InsertOperator("×".into()),
        KeyEvent::InsertNumber("2".into()),
        KeyEvent::Evaluate,
    ];
    for event in keys {
        calculator.press(event);
    }

    println!("\nfinal history: {}", calculator.history().joined());
    println!("=== Example Complete ===");
}
