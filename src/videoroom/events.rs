//! Typed shapes of asynchronous VideoRoom plugin events.
//!
//! Every shape decodes leniently: fields the server leaves out take their
//! zero value, so a record only needs its identifying key to decode.

use serde::{Deserialize, Serialize};

use super::common::{ParticipantRef, Publisher};
use crate::types::EventData;
use crate::types::constants::event_keys;

/// `{"videoroom": "event", "error_code": .., "error": ..}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ErrorEvent {
    pub videoroom: String,
    pub error_code: u64,
    pub error: String,
}

/// New or updated publishers in the room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PublishersEvent {
    pub videoroom: String,
    pub room: u64,
    pub publishers: Vec<Publisher>,
}

/// A publisher stopped publishing; `unpublished` is its id, or `"ok"` for our own feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UnpublishedEvent {
    pub videoroom: String,
    pub room: u64,
    pub unpublished: ParticipantRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JoiningParticipant {
    pub id: u64,
    pub display: String,
}

/// A participant joined the room (only sent when `notify_joining` is set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JoiningEvent {
    pub videoroom: String,
    pub room: u64,
    pub joining: JoiningParticipant,
}

/// A participant left the room; `leaving` is its id, or `"ok"` for our own handle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LeavingEvent {
    pub videoroom: String,
    pub room: u64,
    pub leaving: ParticipantRef,
}

/// Any other VideoRoom event (`destroyed`, `talking`, `slow_link`, ...).
///
/// Keeps every field of the record as received, so decoding it never fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UnknownEvent {
    #[serde(flatten)]
    pub fields: EventData,
}

impl UnknownEvent {
    /// The `videoroom` marker, when it is a string
    pub fn videoroom(&self) -> Option<&str> {
        self.fields
            .get(event_keys::VIDEOROOM)
            .and_then(|value| value.as_str())
    }
}
