use super::{ClientState, VideoRoomClientBuilder, VideoRoomClientOptions};
use crate::infrastructure::HeartbeatManager;
use crate::messaging::{EventRouter, VideoRoomEvent};
use crate::session::KeepAlive;
use crate::types::message::EventMsg;
use crate::types::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio_util::sync::CancellationToken;

/// Ties one Janus session to its heartbeat and its typed event stream.
///
/// The session transport stays with the caller: it keeps sending requests on
/// its own and hands every plugin event it receives to [`dispatch`](Self::dispatch).
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use janus_videoroom_rs::{KeepAlive, KeepAliveAck, VideoRoomClient, VideoRoomClientOptions};
///
/// struct Session;
///
/// #[async_trait::async_trait]
/// impl KeepAlive for Session {
///     async fn keep_alive(&self) -> janus_videoroom_rs::Result<KeepAliveAck> {
///         Ok(KeepAliveAck::new(1, "tx"))
///     }
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VideoRoomClient::new(Arc::new(Session), VideoRoomClientOptions::default())?;
/// let _events = client.subscribe();
///
/// client.start_heartbeat().await;
/// // ... feed received events through client.dispatch(&msg)
/// client.stop_heartbeat().await;
/// # Ok(())
/// # }
/// ```
pub struct VideoRoomClient<S: ?Sized> {
    pub(crate) session: Arc<S>,
    pub(crate) options: VideoRoomClientOptions,
    pub(crate) router: Arc<EventRouter>,

    // Consolidated mutable state
    pub(crate) state: Arc<RwLock<ClientState>>,
}

impl<S: ?Sized> Clone for VideoRoomClient<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            options: self.options.clone(),
            router: Arc::clone(&self.router),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> VideoRoomClient<S>
where
    S: KeepAlive + ?Sized + 'static,
{
    /// Creates a client for an already open session.
    ///
    /// # Errors
    ///
    /// Returns [`VideoRoomError::Config`](crate::types::VideoRoomError::Config) for a
    /// zero heartbeat interval or event buffer.
    pub fn new(session: Arc<S>, options: VideoRoomClientOptions) -> Result<Self> {
        VideoRoomClientBuilder::new(session, options).map(|builder| builder.build())
    }

    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    pub fn heartbeat_interval(&self) -> Duration {
        self.options.heartbeat_interval()
    }

    /// Starts the heartbeat task. Returns `false` if one is already running.
    pub async fn start_heartbeat(&self) -> bool {
        let mut state = self.state.write().await;
        if state.is_heartbeat_running() {
            tracing::debug!("Heartbeat already running");
            return false;
        }

        let cancel = CancellationToken::new();
        let heartbeat = HeartbeatManager::new(Arc::downgrade(&self.session))
            .with_interval(self.heartbeat_interval());

        state.task_manager.prune();
        state.task_manager.spawn(heartbeat.run(cancel.clone()));
        state.heartbeat_cancel = Some(cancel);
        true
    }

    /// Signals the heartbeat to stop and waits for its task to finish.
    ///
    /// A keep-alive already in flight is allowed to complete.
    pub async fn stop_heartbeat(&self) {
        let tasks = {
            let mut state = self.state.write().await;
            if let Some(cancel) = state.heartbeat_cancel.take() {
                cancel.cancel();
            }
            std::mem::take(&mut state.task_manager)
        };

        tasks.join_all().await;
    }

    pub async fn is_heartbeat_running(&self) -> bool {
        self.state.read().await.is_heartbeat_running()
    }

    /// Registers a receiver for decoded VideoRoom events
    pub fn subscribe(&self) -> broadcast::Receiver<VideoRoomEvent> {
        self.router.subscribe()
    }

    /// Classifies an incoming plugin event and broadcasts its typed form
    pub fn dispatch(&self, message: &EventMsg) -> Option<VideoRoomEvent> {
        self.router.route(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::EventKind;
    use crate::types::constants::VIDEOROOM_PLUGIN;
    use crate::types::{KeepAliveAck, VideoRoomError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSession {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl KeepAlive for CountingSession {
        async fn keep_alive(&self) -> Result<KeepAliveAck> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(KeepAliveAck::new(42, call.to_string()))
        }
    }

    fn client(interval_ms: u64) -> VideoRoomClient<CountingSession> {
        VideoRoomClient::new(
            Arc::new(CountingSession::default()),
            VideoRoomClientOptions {
                heartbeat_interval: Some(interval_ms),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = VideoRoomClient::new(
            Arc::new(CountingSession::default()),
            VideoRoomClientOptions {
                heartbeat_interval: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(VideoRoomError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_event_buffer() {
        let result = VideoRoomClient::new(
            Arc::new(CountingSession::default()),
            VideoRoomClientOptions {
                event_buffer: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(VideoRoomError::Config(_))));
    }

    #[test]
    fn test_default_options() {
        let options = VideoRoomClientOptions::default();
        assert_eq!(options.heartbeat_interval(), Duration::from_secs(30));
        assert_eq!(options.event_buffer(), 256);
    }

    #[tokio::test(start_paused = true)]
    async fn test_heartbeat_start_stop() {
        let client = client(1000);

        assert!(client.start_heartbeat().await);
        assert!(client.is_heartbeat_running().await);
        assert!(!client.start_heartbeat().await);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        client.stop_heartbeat().await;
        assert!(!client.is_heartbeat_running().await);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(client.session().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_heartbeat_can_restart() {
        let client = client(1000);

        client.start_heartbeat().await;
        client.stop_heartbeat().await;
        assert!(client.start_heartbeat().await);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        client.stop_heartbeat().await;
        assert_eq!(client.session().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_reaches_subscribers() {
        let client = client(1000);
        let mut events = client.subscribe();

        let message = EventMsg::new(
            VIDEOROOM_PLUGIN,
            json!({ "videoroom": "event", "room": 1234, "unpublished": 7 })
                .as_object()
                .cloned()
                .unwrap(),
        );

        let routed = client.dispatch(&message).unwrap();
        assert_eq!(routed.kind(), EventKind::Unpublished);
        assert_eq!(events.recv().await.unwrap(), routed);
    }
}
