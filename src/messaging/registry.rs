//! Ordered table of the VideoRoom event kinds the classifier recognizes.
//!
//! The table is the only place a kind is paired with its constructor, and its
//! order is the match priority: a record carrying several recognized keys is
//! classified as the earliest entry. The catch-all entry must come last.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use super::event::{EventKind, VideoRoomEvent};
use crate::types::{EventData, Result, VideoRoomError};

/// Builds the typed variant for a record once its kind is known
pub type EventConstructor = fn(&EventData) -> Result<VideoRoomEvent>;

#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub kind: EventKind,
    pub construct: EventConstructor,
}

impl RegistryEntry {
    const fn new(kind: EventKind, construct: EventConstructor) -> Self {
        Self { kind, construct }
    }

    /// The field key this entry matches on
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Event kinds in match priority order
pub static EVENT_KINDS: [RegistryEntry; 6] = [
    RegistryEntry::new(EventKind::Error, construct_error),
    RegistryEntry::new(EventKind::Publishers, construct_publishers),
    RegistryEntry::new(EventKind::Unpublished, construct_unpublished),
    RegistryEntry::new(EventKind::Joining, construct_joining),
    RegistryEntry::new(EventKind::Leaving, construct_leaving),
    RegistryEntry::new(EventKind::Unknown, construct_unknown),
];

/// The catch-all entry, evaluated last
pub fn catch_all() -> &'static RegistryEntry {
    &EVENT_KINDS[EVENT_KINDS.len() - 1]
}

/// Looks an entry up by its field key
pub fn by_name(name: &str) -> Option<&'static RegistryEntry> {
    let kind = EventKind::from_name(name)?;
    EVENT_KINDS.iter().find(|entry| entry.kind == kind)
}

/// Field keys in priority order
pub fn names() -> impl Iterator<Item = &'static str> {
    EVENT_KINDS.iter().map(RegistryEntry::name)
}

/// Checks the table against the `EventKind` enum.
///
/// Every kind must appear exactly once, names must be unique, and the
/// catch-all must be the last entry.
pub fn validate() -> Result<()> {
    let mut seen = HashSet::new();
    for entry in EVENT_KINDS.iter() {
        if !seen.insert(entry.name()) {
            return Err(VideoRoomError::Registry(format!(
                "duplicate event kind '{}'",
                entry.name()
            )));
        }
    }

    for kind in EventKind::ALL {
        if by_name(kind.as_str()).map(|entry| entry.kind) != Some(kind) {
            return Err(VideoRoomError::Registry(format!(
                "event kind '{}' has no registry entry",
                kind
            )));
        }
    }

    if EVENT_KINDS.len() != EventKind::ALL.len() {
        return Err(VideoRoomError::Registry(format!(
            "registry has {} entries for {} event kinds",
            EVENT_KINDS.len(),
            EventKind::ALL.len()
        )));
    }

    let last = catch_all();
    if !last.kind.is_catch_all() {
        return Err(VideoRoomError::Registry(format!(
            "catch-all must be the last entry, found '{}'",
            last.name()
        )));
    }

    Ok(())
}

fn decode_as<T: DeserializeOwned>(data: &EventData) -> Result<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(data.clone()))?)
}

fn construct_error(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Error)
}

fn construct_publishers(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Publishers)
}

fn construct_unpublished(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Unpublished)
}

fn construct_joining(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Joining)
}

fn construct_leaving(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Leaving)
}

fn construct_unknown(data: &EventData) -> Result<VideoRoomEvent> {
    decode_as(data).map(VideoRoomEvent::Unknown)
}
