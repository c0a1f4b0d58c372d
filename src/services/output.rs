//! Countdown events and the terminal they are written to

use std::io::{self, Write};

use chrono::{DateTime, Local};
use crossterm::style::{Color, Stylize};
use tracing::warn;

use super::notification::Notifier;
use crate::utils::{format_duration, format_timestamp};

/// Text of the completion line and desktop notification
pub const COMPLETION_TEXT: &str = "Countdown complete!";

/// Something observable the controller did
#[derive(Debug, Clone, PartialEq)]
pub enum CountdownEvent {
    /// A scheduled message came due
    Message { text: Option<String> },
    /// One second elapsed; `remaining` is the value before the decrement
    Tick { remaining: u64, at: DateTime<Local> },
    /// A lap reached zero; `lap` is one-based
    LapComplete { lap: u64, total_laps: u64 },
    Paused,
    Resumed,
    Cancelled,
    Exiting,
}

impl CountdownEvent {
    /// Plain text of the line printed for this event
    pub fn render(&self) -> String {
        match self {
            CountdownEvent::Message { text: Some(text) } => format!("Message: {}", text),
            CountdownEvent::Message { text: None } => "Message: undefined".to_string(),
            CountdownEvent::Tick { remaining, at } => format!(
                "Remaining time: {} | Current Date and Time: {}",
                format_duration(*remaining),
                format_timestamp(at)
            ),
            CountdownEvent::LapComplete { .. } => COMPLETION_TEXT.to_string(),
            CountdownEvent::Paused => "Countdown paused.".to_string(),
            CountdownEvent::Resumed => "Countdown resumed.".to_string(),
            CountdownEvent::Cancelled => "Countdown cancelled.".to_string(),
            CountdownEvent::Exiting => "Exiting.".to_string(),
        }
    }

    /// Terminal color used for this event
    pub fn color(&self) -> Color {
        match self {
            CountdownEvent::Message { .. } => Color::Yellow,
            CountdownEvent::Tick { .. } => Color::Green,
            CountdownEvent::LapComplete { .. } => Color::Blue,
            CountdownEvent::Paused | CountdownEvent::Resumed => Color::Magenta,
            CountdownEvent::Cancelled | CountdownEvent::Exiting => Color::Red,
        }
    }
}

/// Receiver of controller events
pub trait EventSink {
    fn emit(&mut self, event: CountdownEvent);
}

impl EventSink for Vec<CountdownEvent> {
    fn emit(&mut self, event: CountdownEvent) {
        self.push(event);
    }
}

/// Writes colored event lines to stdout and raises a desktop notification
/// for every completed lap
pub struct TerminalOutput {
    notifier: Notifier,
}

impl TerminalOutput {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }
}

impl EventSink for TerminalOutput {
    fn emit(&mut self, event: CountdownEvent) {
        let line = event.render().with(event.color());
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!("Failed to write countdown output: {}", e);
        }

        if let CountdownEvent::LapComplete { lap, total_laps } = event {
            self.notifier
                .notify(COMPLETION_TEXT, &format!("Lap {} of {} finished", lap, total_laps));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_event_lines() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            CountdownEvent::Tick { remaining: 3661, at }.render(),
            "Remaining time: 01:01:01 | Current Date and Time: 2024-01-02 03:04:05"
        );
        assert_eq!(
            CountdownEvent::Message { text: Some("Halfway".into()) }.render(),
            "Message: Halfway"
        );
        assert_eq!(
            CountdownEvent::Message { text: None }.render(),
            "Message: undefined"
        );
        assert_eq!(
            CountdownEvent::LapComplete { lap: 1, total_laps: 2 }.render(),
            "Countdown complete!"
        );
        assert_eq!(CountdownEvent::Exiting.render(), "Exiting.");
    }

    #[test]
    fn event_kinds_are_visually_distinct() {
        assert_eq!(CountdownEvent::Message { text: None }.color(), Color::Yellow);
        assert_eq!(CountdownEvent::LapComplete { lap: 1, total_laps: 1 }.color(), Color::Blue);
        assert_eq!(CountdownEvent::Paused.color(), Color::Magenta);
        assert_eq!(CountdownEvent::Cancelled.color(), Color::Red);
    }
}
