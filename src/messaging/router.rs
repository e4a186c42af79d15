use super::classifier;
use super::event::VideoRoomEvent;
use crate::types::message::EventMsg;
use tokio::sync::broadcast;

/// Routes incoming plugin events to typed subscribers
pub struct EventRouter {
    sender: broadcast::Sender<VideoRoomEvent>,
}

impl EventRouter {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Registers a new receiver of typed events
    pub fn subscribe(&self) -> broadcast::Receiver<VideoRoomEvent> {
        self.sender.subscribe()
    }

    /// Classifies, decodes and broadcasts one event.
    ///
    /// Returns the decoded event, or `None` if the message did not come from
    /// the VideoRoom plugin.
    pub fn route(&self, message: &EventMsg) -> Option<VideoRoomEvent> {
        if !message.is_videoroom() {
            tracing::debug!(
                "Ignoring event from plugin {}",
                message.plugindata.plugin
            );
            return None;
        }

        let event = match classifier::decode_event(message.data()) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(
                    "Failed to decode {} event: {}",
                    classifier::classify(message.data()),
                    e
                );
                return None;
            }
        };

        tracing::debug!(
            "Routing event: kind={}, sender={}",
            event.kind(),
            message.sender
        );

        if self.sender.send(event.clone()).is_err() {
            tracing::debug!("No subscribers for {} event", event.kind());
        }

        Some(event)
    }
}
