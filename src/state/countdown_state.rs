//! Countdown state and the user settings it is built from

use crate::{tasks::TaskHandle, utils::parse_leading_int};

/// A text to print when the countdown reaches a given remaining second
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessage {
    /// `None` when the time part did not parse; such a message never fires
    pub at_second: Option<i64>,
    /// `None` when the entry had no `:` separator
    pub text: Option<String>,
}

impl ScheduledMessage {
    pub fn new(at_second: i64, text: impl Into<String>) -> Self {
        Self {
            at_second: Some(at_second),
            text: Some(text.into()),
        }
    }

    /// Parse a single `time:message` entry without rejecting anything
    ///
    /// Only the piece between the first and second `:` is kept as text.
    pub fn from_entry(entry: &str) -> Self {
        let mut parts = entry.split(':');
        let at_second = parts.next().and_then(parse_leading_int);
        let text = parts.next().map(str::to_string);
        Self { at_second, text }
    }
}

/// Validated user input used to build a countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSettings {
    pub seconds: u64,
    pub loops: u64,
    pub messages: Vec<ScheduledMessage>,
}

/// Mutable state of the live countdown
#[derive(Debug, Clone)]
pub struct CountdownState {
    /// Seconds left in the current lap
    pub remaining_seconds: u64,
    /// Lap length, reused on every restart
    pub total_seconds_per_loop: u64,
    /// Laps requested; 0 and 1 both run a single lap
    pub loop_count: u64,
    /// Zero-based index of the running lap
    pub current_loop: u64,
    pub paused: bool,
    /// Live tick registration, if any
    pub timer: Option<TaskHandle>,
    pub messages: Vec<ScheduledMessage>,
}

impl CountdownState {
    pub fn new(settings: CountdownSettings) -> Self {
        Self {
            remaining_seconds: settings.seconds,
            total_seconds_per_loop: settings.seconds,
            loop_count: settings.loops,
            current_loop: 0,
            paused: false,
            timer: None,
            messages: settings.messages,
        }
    }

    /// First message scheduled for `remaining` seconds, in insertion order
    pub fn message_for(&self, remaining: u64) -> Option<&ScheduledMessage> {
        let remaining = i64::try_from(remaining).ok()?;
        self.messages
            .iter()
            .find(|msg| msg.at_second == Some(remaining))
    }

    /// Whether another lap follows the current one
    pub fn has_more_laps(&self) -> bool {
        self.current_loop + 1 < self.loop_count
    }

    /// Number of laps that will run in total
    pub fn total_laps(&self) -> u64 {
        self.loop_count.max(1)
    }
}
