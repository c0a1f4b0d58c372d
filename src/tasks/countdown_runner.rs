//! Countdown runner background task

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::scheduler::{Scheduler, TaskHandle};
use crate::{
    services::EventSink,
    state::{Action, CountdownController},
};

/// Input delivered to the task that owns the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    Tick(TaskHandle),
    Action(Action),
}

/// Own the controller and apply ticks and menu actions in arrival order
///
/// Returns the controller once it has been told to exit, or when every
/// sender of the channel is gone.
pub async fn countdown_task<S, E>(
    mut controller: CountdownController<S, E>,
    mut events: mpsc::UnboundedReceiver<ControllerEvent>,
) -> CountdownController<S, E>
where
    S: Scheduler,
    E: EventSink,
{
    info!("Starting countdown task");

    while let Some(event) = events.recv().await {
        match event {
            ControllerEvent::Tick(handle) => controller.on_tick(handle),
            ControllerEvent::Action(action) => {
                controller.handle_action(action);
                let snapshot = controller.snapshot();
                debug!(?action, active = snapshot.is_active(), state = ?snapshot, "Action applied");
            }
        }

        if controller.is_terminated() {
            break;
        }
    }

    info!("Countdown task finished");
    controller
}
