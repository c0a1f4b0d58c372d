//! Validated free-text prompts

use crossterm::style::Stylize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    error::{Error, Result},
    state::{CountdownSettings, ScheduledMessage},
    utils::parse_leading_int,
};

pub const SECONDS_PROMPT: &str = "Enter the number of seconds for the countdown:";
pub const LOOPS_PROMPT: &str = "Enter the number of loops (repeats) for the countdown:";
pub const MESSAGES_PROMPT: &str = "Enter messages in the format \"time:message\" separated by commas (e.g., \"30:Halfway there,10:Almost done\"):";

/// Values supplied up front; each one skips its prompt
#[derive(Debug, Clone, Default)]
pub struct SettingsPreset {
    pub seconds: Option<u64>,
    pub loops: Option<u64>,
    pub messages: Option<String>,
}

/// Accept a positive number of seconds
pub fn parse_seconds(input: &str) -> Result<u64> {
    match parse_leading_int(input) {
        Some(value) if value > 0 => Ok(value as u64),
        _ => Err(Error::InvalidSeconds),
    }
}

/// Accept a non-negative loop count
pub fn parse_loops(input: &str) -> Result<u64> {
    match parse_leading_int(input) {
        Some(value) if value >= 0 => Ok(value as u64),
        _ => Err(Error::InvalidLoops),
    }
}

/// Split a comma-separated `time:message` list. Never fails.
pub fn parse_messages(input: &str) -> Vec<ScheduledMessage> {
    input.split(',').map(ScheduledMessage::from_entry).collect()
}

/// Ask `question` until `parse` accepts the answer
///
/// Validation errors are shown and the question repeated; anything else,
/// including end of input, is returned.
pub async fn prompt_until_valid<R, W, T, F>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    parse: F,
) -> Result<T>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn(&str) -> Result<T>,
{
    loop {
        writer
            .write_all(format!("{} {} ", "?".green(), question.bold()).as_bytes())
            .await?;
        writer.flush().await?;

        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Err(Error::Closed);
        }
        let answer = line.trim_end_matches(['\r', '\n']);

        match parse(answer) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() => {
                debug!(answer, "Rejected input: {}", e);
                writer
                    .write_all(format!("{} {}\n", ">>".red(), e).as_bytes())
                    .await?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Collect the countdown settings, prompting for anything not preset
pub async fn collect_settings<R, W>(
    reader: &mut R,
    writer: &mut W,
    preset: SettingsPreset,
) -> Result<CountdownSettings>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let seconds = match preset.seconds {
        Some(seconds) => seconds,
        None => prompt_until_valid(reader, writer, SECONDS_PROMPT, parse_seconds).await?,
    };

    let loops = match preset.loops {
        Some(loops) => loops,
        None => prompt_until_valid(reader, writer, LOOPS_PROMPT, parse_loops).await?,
    };

    let messages = match preset.messages {
        Some(spec) => parse_messages(&spec),
        None => {
            prompt_until_valid(reader, writer, MESSAGES_PROMPT, |s| Ok(parse_messages(s))).await?
        }
    };

    Ok(CountdownSettings {
        seconds,
        loops,
        messages,
    })
}
