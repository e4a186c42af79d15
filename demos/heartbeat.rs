use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use janus_videoroom_rs::types::VIDEOROOM_PLUGIN;
use janus_videoroom_rs::{
    EventMsg, KeepAlive, KeepAliveAck, VideoRoomClient, VideoRoomClientOptions, VideoRoomError,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Stand-in for a real Janus session: acks every keep-alive, rejects every third one
struct LoopbackSession {
    id: u64,
    transactions: AtomicU64,
}

#[async_trait]
impl KeepAlive for LoopbackSession {
    async fn keep_alive(&self) -> janus_videoroom_rs::Result<KeepAliveAck> {
        let transaction = self.transactions.fetch_add(1, Ordering::SeqCst) + 1;
        if transaction % 3 == 0 {
            return Err(VideoRoomError::Session(format!(
                "transaction {transaction} timed out"
            )));
        }
        Ok(KeepAliveAck::new(self.id, transaction.to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing to see heartbeat logs (override with RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let session = Arc::new(LoopbackSession {
        id: 8_675_309,
        transactions: AtomicU64::new(0),
    });

    let client = VideoRoomClient::new(
        session,
        VideoRoomClientOptions {
            heartbeat_interval: Some(1000),
            ..Default::default()
        },
    )?;

    println!("Starting heartbeat (1s interval)...");
    client.start_heartbeat().await;

    let mut events = client.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            println!("  -> {}: {:?}", event.kind(), event);
        }
    });

    for data in [
        json!({ "videoroom": "event", "room": 1234, "publishers": [{ "id": 7, "display": "alice" }] }),
        json!({ "videoroom": "event", "room": 1234, "error_code": 426, "error": "No such room" }),
        json!({ "videoroom": "event", "room": 1234, "leaving": 7 }),
        json!({ "videoroom": "destroyed", "room": 1234 }),
    ] {
        let message = EventMsg::new(VIDEOROOM_PLUGIN, data.as_object().cloned().unwrap_or_default());
        client.dispatch(&message);
    }

    tokio::time::sleep(Duration::from_millis(4500)).await;

    println!("Stopping heartbeat...");
    client.stop_heartbeat().await;
    drop(client);
    let _ = printer.await;

    Ok(())
}
