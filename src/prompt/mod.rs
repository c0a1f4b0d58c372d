//! Interactive prompt module
//! 
//! Collects the countdown settings and reads menu actions from the terminal.

pub mod input;
pub mod menu;

// Re-export main functions
pub use input::{
    collect_settings, parse_loops, parse_messages, parse_seconds, prompt_until_valid,
    SettingsPreset,
};
pub use menu::{prompt_action, render_menu, run_menu};
