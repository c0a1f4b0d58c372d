//! Action menu shown while the countdown runs

use std::{fmt::Write as _, future::Future};

use crossterm::style::Stylize;
use tokio::{
    io::{AsyncBufRead, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::info;

use super::input::prompt_until_valid;
use crate::{
    error::{Error, Result},
    state::Action,
    tasks::ControllerEvent,
};

/// Menu listing every action with its number
pub fn render_menu() -> String {
    let mut menu = String::from("Select an action:");
    for (index, action) in Action::ALL.iter().enumerate() {
        let _ = write!(menu, "\n  {}) {}", (index + 1).to_string().cyan(), action);
    }
    menu.push_str("\n>");
    menu
}

/// Show the menu until a valid action is chosen
pub async fn prompt_action<R, W>(reader: &mut R, writer: &mut W) -> Result<Action>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    prompt_until_valid(reader, writer, &render_menu(), str::parse::<Action>).await
}

/// Read menu actions and forward them to the countdown until Exit
///
/// Closed input and a resolved `interrupt` both count as Exit. Returns once
/// Exit has been sent or the countdown is no longer listening.
pub async fn run_menu<R, W, I>(
    reader: &mut R,
    writer: &mut W,
    interrupt: I,
    events: &mpsc::UnboundedSender<ControllerEvent>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    tokio::pin!(interrupt);

    loop {
        let action = tokio::select! {
            biased;

            _ = &mut interrupt => {
                writer.write_all(b"\n").await?;
                Action::Exit
            }
            result = prompt_action(reader, writer) => match result {
                Ok(action) => action,
                Err(Error::Closed) => {
                    info!("Input closed, exiting");
                    Action::Exit
                }
                Err(e) => return Err(e),
            },
        };

        if events.send(ControllerEvent::Action(action)).is_err() || action == Action::Exit {
            return Ok(());
        }
    }
}
