//! Configuration and CLI argument handling

use clap::Parser;

use crate::prompt::{parse_loops, parse_seconds, SettingsPreset};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "lapclock")]
#[command(about = "An interactive terminal countdown timer with laps and scheduled messages")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Countdown length in seconds (skips the prompt)
    #[arg(short, long, value_parser = seconds_arg)]
    pub seconds: Option<u64>,

    /// Number of laps to run; 0 and 1 both run once (skips the prompt)
    #[arg(short, long, value_parser = loops_arg)]
    pub loops: Option<u64>,

    /// Scheduled messages as "time:message" pairs separated by commas (skips the prompt)
    #[arg(short, long)]
    pub messages: Option<String>,

    /// Only log lap completions instead of showing desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Settings given on the command line
    pub fn preset(&self) -> SettingsPreset {
        SettingsPreset {
            seconds: self.seconds,
            loops: self.loops,
            messages: self.messages.clone(),
        }
    }
}

fn seconds_arg(value: &str) -> Result<u64, String> {
    parse_seconds(value).map_err(|e| e.to_string())
}

fn loops_arg(value: &str) -> Result<u64, String> {
    parse_loops(value).map_err(|e| e.to_string())
}
