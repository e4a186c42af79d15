pub mod constants;
pub mod error;
pub mod message;

pub use constants::*;
pub use error::{Result, VideoRoomError};
pub use message::{EventData, EventMsg, KeepAliveAck, PluginData};
