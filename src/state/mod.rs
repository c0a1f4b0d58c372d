//! State management module
//! 
//! The countdown's owned state, the controller that mutates it, and the
//! snapshot types used to observe it.

pub mod action;
pub mod controller;
pub mod countdown_state;
pub mod timer_state;

// Re-export main types
pub use action::Action;
pub use controller::CountdownController;
pub use countdown_state::{CountdownSettings, CountdownState, ScheduledMessage};
pub use timer_state::{CountdownPhase, TimerState};
