use serde::{Deserialize, Serialize};

/// An active publisher in a room, as listed in join responses and
/// `publishers` events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Publisher {
    pub id: u64,
    pub display: String,
    pub audio_codec: String,
    pub video_codec: String,
    pub simulcast: bool,
    pub talking: bool,
}

/// A room participant, as listed by `listparticipants`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Participant {
    pub id: u64,
    pub display: String,
    pub publisher: bool,
    pub talking: bool,
}

/// Who an `unpublished` or `leaving` event refers to.
///
/// Janus sends the participant id, or the string `"ok"` when the event
/// describes the receiving handle itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParticipantRef {
    Id(u64),
    Status(String),
}

impl ParticipantRef {
    /// Whether the event is about our own handle
    pub fn is_self(&self) -> bool {
        matches!(self, Self::Status(status) if status == "ok")
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Status(_) => None,
        }
    }
}

impl Default for ParticipantRef {
    fn default() -> Self {
        Self::Id(0)
    }
}
