use thiserror::Error;

/// Errors that can occur when talking to the Janus VideoRoom plugin.
#[derive(Error, Debug)]
pub enum VideoRoomError {
    /// The session transport reported a failure (keep-alive rejected, send failed, etc.)
    #[error("Session error: {0}")]
    Session(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The event kind registry is inconsistent
    #[error("Registry error: {0}")]
    Registry(String),
}

/// Convenience type alias for `Result<T, VideoRoomError>`.
pub type Result<T> = std::result::Result<T, VideoRoomError>;
