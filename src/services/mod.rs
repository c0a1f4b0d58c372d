//! Outward-facing side effects module
//! 
//! Terminal output of countdown events and desktop notifications.

pub mod notification;
pub mod output;

// Re-export main types
pub use notification::Notifier;
pub use output::{CountdownEvent, EventSink, TerminalOutput, COMPLETION_TEXT};
