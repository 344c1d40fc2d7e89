use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop handle for a running scenario.
///
/// Cancelling clears the manager's running flag; an in-flight tick always
/// completes and the driving loop observes the flag on its next iteration.
/// Safe to call from any thread at any point, including mid-tick.
#[derive(Debug, Clone)]
pub struct CancelToken {
    running: Arc<AtomicBool>,
}

impl CancelToken {
    pub(crate) fn new(running: Arc<AtomicBool>) -> Self {
        Self { running }
    }

    pub fn cancel(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        !self.running.load(Ordering::SeqCst)
    }
}

/// Resolve a Ctrl-C press into a cancellation.
///
/// Spawn alongside `run_scenario` on any runtime; the process-level signal
/// only sets the token and never touches manager state directly.
pub async fn cancel_on_interrupt(token: CancelToken) -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!("interrupt received, stopping scenario");
    token.cancel();
    Ok(())
}
