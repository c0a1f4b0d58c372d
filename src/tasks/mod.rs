//! Background tasks module
//! 
//! This module contains the tick scheduler and the task that drives the
//! countdown controller.

pub mod countdown_runner;
pub mod scheduler;

// Re-export main types
pub use countdown_runner::{countdown_task, ControllerEvent};
pub use scheduler::{Scheduler, TaskHandle, TokioScheduler};
