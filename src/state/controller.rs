//! Countdown controller owning the live countdown state

use std::time::Duration;
use chrono::Local;
use tracing::{debug, info, trace};

use super::{Action, CountdownPhase, CountdownSettings, CountdownState, TimerState};
use crate::{
    services::{CountdownEvent, EventSink},
    tasks::{Scheduler, TaskHandle},
};

/// Interval between ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Drives a countdown from ticks and menu actions
///
/// All mutation of [`CountdownState`] goes through this type. At most one tick
/// registration is live at any time.
pub struct CountdownController<S, E> {
    state: CountdownState,
    phase: CountdownPhase,
    scheduler: S,
    sink: E,
}

impl<S: Scheduler, E: EventSink> CountdownController<S, E> {
    /// Create an idle controller from validated settings
    pub fn new(settings: CountdownSettings, scheduler: S, sink: E) -> Self {
        Self {
            state: CountdownState::new(settings),
            phase: CountdownPhase::Idle,
            scheduler,
            sink,
        }
    }

    /// Start the first lap with the configured duration
    pub fn start_countdown(&mut self) {
        info!(
            "Starting countdown: {}s per lap, {} lap(s), {} message(s)",
            self.state.total_seconds_per_loop,
            self.state.total_laps(),
            self.state.messages.len()
        );
        self.start(self.state.total_seconds_per_loop);
    }

    /// Count down from `seconds`, replacing any live registration
    pub fn start(&mut self, seconds: u64) {
        if self.is_terminated() {
            return;
        }

        self.clear_timer();
        self.state.remaining_seconds = seconds;
        self.state.timer = Some(self.scheduler.schedule(TICK_PERIOD));
        self.phase = CountdownPhase::Running;
        debug!(seconds, lap = self.state.current_loop + 1, "Countdown running");
    }

    /// Handle one tick; ticks from registrations that are no longer live are dropped
    pub fn on_tick(&mut self, handle: TaskHandle) {
        if self.is_terminated() || self.state.timer != Some(handle) {
            trace!(id = handle.id(), "Ignoring stale tick");
            return;
        }

        let remaining = self.state.remaining_seconds;
        if remaining > 0 {
            if let Some(message) = self.state.message_for(remaining) {
                let text = message.text.clone();
                self.sink.emit(CountdownEvent::Message { text });
            }
            self.sink.emit(CountdownEvent::Tick {
                remaining,
                at: Local::now(),
            });
            self.state.remaining_seconds -= 1;
            return;
        }

        self.clear_timer();
        let lap = self.state.current_loop + 1;
        info!("Lap {} of {} complete", lap, self.state.total_laps());
        self.sink.emit(CountdownEvent::LapComplete {
            lap,
            total_laps: self.state.total_laps(),
        });

        if self.state.has_more_laps() {
            self.state.current_loop += 1;
            self.start(self.state.total_seconds_per_loop);
        } else {
            self.phase = CountdownPhase::Completed;
            info!("Countdown finished");
        }
    }

    /// Stop ticking and remember where we were. Returns whether anything changed.
    pub fn pause(&mut self) -> bool {
        if self.is_terminated() || self.state.timer.is_none() || self.state.paused {
            return false;
        }

        self.clear_timer();
        self.state.paused = true;
        self.phase = CountdownPhase::Paused;
        info!("Countdown paused at {}s", self.state.remaining_seconds);
        self.sink.emit(CountdownEvent::Paused);
        true
    }

    /// Continue a paused countdown from the exact remaining time
    pub fn resume(&mut self) -> bool {
        if self.is_terminated() || !self.state.paused {
            return false;
        }

        self.start(self.state.remaining_seconds);
        self.state.paused = false;
        info!("Countdown resumed at {}s", self.state.remaining_seconds);
        self.sink.emit(CountdownEvent::Resumed);
        true
    }

    /// Stop ticking. Pause state, remaining time and lap counters are left as they are.
    pub fn cancel(&mut self) -> bool {
        if self.is_terminated() || self.state.timer.is_none() {
            return false;
        }

        self.clear_timer();
        self.phase = CountdownPhase::Cancelled;
        info!("Countdown cancelled at {}s", self.state.remaining_seconds);
        self.sink.emit(CountdownEvent::Cancelled);
        true
    }

    /// Stop ticking for good; every later call is a no-op
    pub fn exit(&mut self) {
        if self.is_terminated() {
            return;
        }

        self.clear_timer();
        self.phase = CountdownPhase::Terminated;
        info!("Exiting countdown");
        self.sink.emit(CountdownEvent::Exiting);
    }

    /// Apply a menu action
    pub fn handle_action(&mut self, action: Action) {
        let applied = match action {
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::Cancel => self.cancel(),
            Action::Exit => {
                self.exit();
                true
            }
        };

        if !applied {
            debug!(?action, phase = ?self.phase, "Action not applicable");
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == CountdownPhase::Terminated
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Current phase and progress
    pub fn snapshot(&self) -> TimerState {
        TimerState {
            phase: self.phase,
            remaining_seconds: self.state.remaining_seconds,
            lap: self.state.current_loop + 1,
            total_laps: self.state.total_laps(),
        }
    }

    fn clear_timer(&mut self) {
        if let Some(handle) = self.state.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}
