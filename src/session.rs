use async_trait::async_trait;

use crate::types::{KeepAliveAck, Result};

/// The part of a Janus session the heartbeat needs.
///
/// Implemented by the session transport; must be safe to call concurrently
/// with the session's other operations.
#[async_trait]
pub trait KeepAlive: Send + Sync {
    /// Sends one `keepalive` request and waits for the server's ack
    async fn keep_alive(&self) -> Result<KeepAliveAck>;
}
