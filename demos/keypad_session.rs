//! Keypad Session
//!
//! Drives the engine through a scripted keypad session and prints every
//! display update, including a backspace correction, the percent key, and
//! a division-by-zero abort that leaves the display untouched.
//!
//! Run with: cargo run --example keypad_session

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

    println!("=== Keypad Session Example ===\n");

    let mut calculator = Calculator::new(Console::default());

    println!("-- typing 12, correcting to 15, adding 50% of 50 --");
    for event in [
        KeyEvent::InsertNumber("1".into()),
        KeyEvent::InsertNumber("2".into()),
        KeyEvent::Backspace,
        KeyEvent::InsertNumber("5".into()),
        KeyEvent::InsertOperator("+".into()),
        KeyEvent::InsertNumber("50".into()),
        KeyEvent::PercentToDecimal,
        KeyEvent::Evaluate,
    ] {
        calculator.press(event);
    }

    println!("\n-- dividing by zero aborts quietly (watch the warn log) --");
    for event in [
        KeyEvent::ClearAll,
        KeyEvent::InsertNumber("8".into()),
        KeyEvent::InsertOperator("÷".into()),
        KeyEvent::InsertNumber("0".into()),
        KeyEvent::Evaluate,
    ] {
        calculator.press(event);
    }

    println!("\n=== Example Complete ===");
}
