use super::{ClientState, VideoRoomClient};
use crate::messaging::{registry, EventRouter};
use crate::session::KeepAlive;
use crate::types::constants::{DEFAULT_EVENT_BUFFER, HEARTBEAT_INTERVAL};
use crate::types::{Result, VideoRoomError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct VideoRoomClientOptions {
    /// Keep-alive period in milliseconds (defaults to 30 s)
    pub heartbeat_interval: Option<u64>,
    /// Capacity of the typed event broadcast channel
    pub event_buffer: Option<usize>,
}

impl VideoRoomClientOptions {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval.unwrap_or(HEARTBEAT_INTERVAL))
    }

    pub fn event_buffer(&self) -> usize {
        self.event_buffer.unwrap_or(DEFAULT_EVENT_BUFFER)
    }
}

/// Builder for VideoRoomClient that validates options before anything runs
pub struct VideoRoomClientBuilder<S: ?Sized> {
    session: Arc<S>,
    options: VideoRoomClientOptions,
}

impl<S> VideoRoomClientBuilder<S>
where
    S: KeepAlive + ?Sized + 'static,
{
    /// Create a new builder
    pub fn new(session: Arc<S>, options: VideoRoomClientOptions) -> Result<Self> {
        if options.heartbeat_interval == Some(0) {
            return Err(VideoRoomError::Config(
                "heartbeat interval must be greater than zero".to_string(),
            ));
        }

        if options.event_buffer == Some(0) {
            return Err(VideoRoomError::Config(
                "event buffer must be greater than zero".to_string(),
            ));
        }

        registry::validate()?;

        Ok(Self { session, options })
    }

    /// Build the client. No background task is started until
    /// [`VideoRoomClient::start_heartbeat`] is called.
    pub fn build(self) -> VideoRoomClient<S> {
        let router = EventRouter::new(self.options.event_buffer());

        VideoRoomClient {
            session: self.session,
            options: self.options,
            router: Arc::new(router),
            state: Arc::new(RwLock::new(ClientState::new())),
        }
    }
}
