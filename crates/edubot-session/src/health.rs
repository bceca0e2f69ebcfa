use crate::api::ChatApi;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Connectivity as last observed by a health poll or an ask.
#[derive(Debug, Default)]
pub struct HealthState {
    online: AtomicBool,
    standalone: bool,
}

impl HealthState {
    /// State for a session talking to a server; starts offline.
    pub fn networked() -> Self {
        Self::default()
    }

    /// State for a session with no server at all; stays offline.
    pub fn standalone() -> Self {
        Self {
            online: AtomicBool::new(false),
            standalone: true,
        }
    }

    /// Whether the server answered the most recent call.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Records the outcome of a call.
    pub fn set_online(&self, online: bool) {
        let was = self.online.swap(online, Ordering::SeqCst);
        if was != online {
            debug!(online, "connection status changed");
        }
    }

    /// Short badge text.
    pub fn label(&self) -> &'static str {
        if self.is_online() {
            "Live API"
        } else {
            "Demo Mode"
        }
    }

    /// One-line status message.
    pub fn message(&self) -> &'static str {
        if self.standalone {
            "Demo mode (launch server for live APIs)."
        } else if self.is_online() {
            "Live API connected"
        } else {
            "Demo mode active (API unavailable)"
        }
    }
}

/// Runs one probe and records the result. Never fails.
pub async fn poll_once(api: &dyn ChatApi, state: &HealthState) {
    match api.health().await {
        Ok(()) => state.set_online(true),
        Err(e) => {
            debug!(error = %e, "health check failed");
            state.set_online(false);
        }
    }
}

/// Spawns the background poll: one probe immediately, then one per `every`.
pub fn spawn_poller(
    api: Arc<dyn ChatApi>,
    state: Arc<HealthState>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            poll_once(api.as_ref(), &state).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let state = HealthState::networked();
        assert_eq!(state.label(), "Demo Mode");
        assert_eq!(state.message(), "Demo mode active (API unavailable)");

        state.set_online(true);
        assert_eq!(state.label(), "Live API");
        assert_eq!(state.message(), "Live API connected");

        let standalone = HealthState::standalone();
        assert!(!standalone.is_online());
        assert!(standalone.message().starts_with("Demo mode (launch server"));
    }
}
