use tokio::task::JoinHandle;

/// Tracks background tasks owned by a client
pub struct TaskManager {
    handles: Vec<JoinHandle<()>>,
}

impl TaskManager {
    /// Create a new empty task manager
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Spawn a task and track it
    pub fn spawn<F>(&mut self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handles.push(tokio::spawn(future));
    }

    /// Forget tasks that have already finished
    pub fn prune(&mut self) {
        self.handles.retain(|handle| !handle.is_finished());
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every tracked task to finish on its own.
    ///
    /// Callers signal their tasks to stop first; this does not abort anything.
    pub async fn join_all(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::error!("Background task failed: {}", e);
            }
        }
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
