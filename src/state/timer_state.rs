//! Timer phase and snapshot structures

/// Where the countdown is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
    Terminated,
}

/// Point-in-time view of the countdown for logging and inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub phase: CountdownPhase,
    pub remaining_seconds: u64,
    /// One-based lap number
    pub lap: u64,
    pub total_laps: u64,
}

impl TimerState {
    /// Check if ticks are currently being delivered
    pub fn is_active(&self) -> bool {
        self.phase == CountdownPhase::Running
    }
}
