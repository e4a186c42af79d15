// Module declarations
mod builder;
mod core;
mod state;

// Public API exports
pub use builder::{VideoRoomClientBuilder, VideoRoomClientOptions};
pub use self::core::VideoRoomClient;
pub use state::ClientState;
