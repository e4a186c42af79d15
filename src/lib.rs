//! # Janus VideoRoom Rust
//!
//! A client-side adapter for the Janus VideoRoom plugin: keeps a session alive
//! with periodic keep-alives and turns the plugin's loosely-typed event records
//! into a closed set of typed events.
//!
//! The session transport itself is not part of this crate. Implement
//! [`KeepAlive`] for your session and hand received plugin events to the
//! classifier or to [`VideoRoomClient::dispatch`].
//!
//! ## Example
//!
//! ```
//! use janus_videoroom_rs::{classify, EventKind, VideoRoomEvent, decode_event};
//! use serde_json::json;
//!
//! let record = json!({ "videoroom": "event", "error_code": 426, "error": "No such room" });
//! let record = record.as_object().unwrap();
//!
//! assert_eq!(classify(record), EventKind::Error);
//! assert!(matches!(decode_event(record), Ok(VideoRoomEvent::Error(_))));
//! ```

pub mod client;
pub mod infrastructure;
pub mod messaging;
pub mod session;
pub mod types;
pub mod videoroom;

pub use client::{VideoRoomClient, VideoRoomClientOptions};
pub use infrastructure::{start_heartbeat, HeartbeatManager};
pub use messaging::{
    classify, decode_event, identify_event_kind_constructor, identify_event_kind_name,
    EventConstructor, EventKind, EventRouter, VideoRoomEvent,
};
pub use session::KeepAlive;
pub use types::{EventData, EventMsg, KeepAliveAck, Result, VideoRoomError};
