//! Desktop notifications for completed laps

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use notify_rust::Notification;
use tracing::{debug, info, warn};

const APP_NAME: &str = "lapclock";

/// Fires desktop notifications, falling back to log-only output once the
/// desktop backend has failed
#[derive(Debug, Clone)]
pub struct Notifier {
    desktop: Arc<AtomicBool>,
}

impl Notifier {
    /// Create a notifier; with `desktop` false it only logs
    pub fn new(desktop: bool) -> Self {
        debug!(desktop, "Notifier created");
        Self {
            desktop: Arc::new(AtomicBool::new(desktop)),
        }
    }

    /// Create a notifier that never touches the desktop
    pub fn log_only() -> Self {
        Self::new(false)
    }

    pub fn is_desktop(&self) -> bool {
        self.desktop.load(Ordering::Relaxed)
    }

    /// Show a notification without blocking the caller
    pub fn notify(&self, summary: &str, body: &str) {
        if !self.is_desktop() {
            info!("[NOTIFY] {}: {}", summary, body);
            return;
        }

        let desktop = Arc::clone(&self.desktop);
        let summary = summary.to_string();
        let body = body.to_string();
        let show = move || show_desktop(&desktop, &summary, &body);

        // The desktop backend blocks on D-Bus, keep it off the runtime threads
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(show);
            }
            Err(_) => show(),
        }
    }
}

fn show_desktop(desktop: &AtomicBool, summary: &str, body: &str) {
    let result = Notification::new()
        .appname(APP_NAME)
        .summary(summary)
        .body(body)
        .show();

    match result {
        Ok(_) => debug!(summary, "desktop notification shown"),
        Err(e) => {
            warn!(error = %e, "desktop notification failed; switching to log-only notifier");
            desktop.store(false, Ordering::Relaxed);
            info!("[NOTIFY] {}: {}", summary, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_only_notifier_stays_off_the_desktop() {
        let notifier = Notifier::log_only();
        notifier.notify("Countdown complete!", "Lap 1 of 1 finished");
        assert!(!notifier.is_desktop());
    }

    #[test]
    fn clones_share_the_fallback_flag() {
        let notifier = Notifier::new(true);
        let clone = notifier.clone();
        notifier.desktop.store(false, Ordering::Relaxed);
        assert!(!clone.is_desktop());
    }
}
