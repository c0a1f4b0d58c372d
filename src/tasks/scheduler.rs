//! Periodic tick registration

use std::{collections::HashMap, time::Duration};
use tokio::{sync::mpsc, task::AbortHandle, time::sleep};
use tracing::{debug, trace};

use super::countdown_runner::ControllerEvent;

/// Identifies one periodic tick registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Registers and cancels periodic ticks
pub trait Scheduler {
    /// Start delivering ticks every `period`, first one after one period
    fn schedule(&mut self, period: Duration) -> TaskHandle;

    /// Stop a registration; unknown handles are ignored
    fn cancel(&mut self, handle: TaskHandle);
}

/// Scheduler backed by tokio tasks that post ticks onto the controller's
/// event channel
///
/// Each tick sleeps a full period after the previous one was posted, so the
/// countdown drifts from wall time by however long delivery takes.
pub struct TokioScheduler {
    next_id: u64,
    tasks: HashMap<TaskHandle, AbortHandle>,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

impl TokioScheduler {
    /// Must be created inside a tokio runtime
    pub fn new(events: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        Self {
            next_id: 0,
            tasks: HashMap::new(),
            events,
        }
    }

    /// Number of registrations whose task is still alive
    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, period: Duration) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            loop {
                sleep(period).await;
                trace!(id = handle.id(), "tick");
                if events.send(ControllerEvent::Tick(handle)).is_err() {
                    debug!(id = handle.id(), "Event channel closed, stopping tick task");
                    break;
                }
            }
        });

        debug!(id = handle.id(), ?period, "Tick task registered");
        self.tasks.insert(handle, task.abort_handle());
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            debug!(id = handle.id(), "Tick task cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delivers_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.schedule(Duration::from_secs(1));

        for _ in 0..3 {
            match rx.recv().await {
                Some(ControllerEvent::Tick(h)) => assert_eq!(h, handle),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        scheduler.cancel(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let _handle = scheduler.schedule(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(rx.try_recv(), Ok(ControllerEvent::Tick(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_registration_stops_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.schedule(Duration::from_secs(1));
        assert!(matches!(rx.recv().await, Some(ControllerEvent::Tick(_))));

        scheduler.cancel(handle);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn handles_are_unique() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let first = scheduler.schedule(Duration::from_secs(1));
        let second = scheduler.schedule(Duration::from_secs(1));
        assert_ne!(first, second);
        assert_eq!(scheduler.active_count(), 2);
    }
}
