//! Imperative shell around the pure core.
//!
//! The shell owns the one [`crate::core::InputHistory`] of the session,
//! receives inbound [`KeyEvent`]s, applies the pure transitions, and drives
//! the outbound display effects through the embedder-supplied
//! [`DisplaySink`].

mod display;
mod event;
mod machine;

pub use display::DisplaySink;
pub use event::KeyEvent;
pub use machine::Calculator;
