use crate::infrastructure::TaskManager;
use tokio_util::sync::CancellationToken;

/// Mutable state for VideoRoomClient, kept behind a single lock
pub struct ClientState {
    /// Background task manager
    pub task_manager: TaskManager,

    /// Stops the running heartbeat, if any
    pub heartbeat_cancel: Option<CancellationToken>,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            task_manager: TaskManager::new(),
            heartbeat_cancel: None,
        }
    }

    pub fn is_heartbeat_running(&self) -> bool {
        self.heartbeat_cancel
            .as_ref()
            .is_some_and(|cancel| !cancel.is_cancelled())
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClientState {
    fn drop(&mut self) {
        if let Some(cancel) = self.heartbeat_cancel.take() {
            cancel.cancel();
        }
    }
}
