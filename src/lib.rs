//! Lapclock - An interactive terminal countdown timer
//! 
//! This library provides the countdown controller, its tick scheduler and the
//! terminal prompts used to configure and steer a countdown.

pub mod config;
pub mod error;
pub mod prompt;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use state::{Action, CountdownController, CountdownSettings};
pub use tasks::{countdown_task, ControllerEvent, TokioScheduler};
