//! Utility functions module
//! 
//! Formatting and parsing helpers plus signal handling shared by the rest of
//! the crate.

pub mod parse;
pub mod signals;
pub mod time_format;

// Re-export main functions
pub use parse::parse_leading_int;
pub use signals::interrupt_signal;
pub use time_format::{format_duration, format_timestamp};
