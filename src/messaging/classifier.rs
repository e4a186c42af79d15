//! Classification of generic VideoRoom event records.
//!
//! A record is matched against the registry in priority order by field-key
//! presence only; values are not inspected until the variant is constructed.

use super::event::{EventKind, VideoRoomEvent};
use super::registry::{self, EventConstructor, RegistryEntry};
use crate::types::{EventData, Result};

fn first_match(data: &EventData) -> Option<&'static RegistryEntry> {
    registry::EVENT_KINDS
        .iter()
        .find(|entry| data.contains_key(entry.name()))
}

fn report_unclassified(data: &EventData) {
    tracing::warn!(
        "Event is not a known VideoRoom event type (fields: {:?})",
        data.keys().collect::<Vec<_>>()
    );
}

/// Returns the field key of the first registry entry present in the record,
/// or `None` when nothing matches.
pub fn identify_event_kind_name(data: &EventData) -> Option<&'static str> {
    match first_match(data) {
        Some(entry) => Some(entry.name()),
        None => {
            report_unclassified(data);
            None
        }
    }
}

/// Returns the constructor of the first registry entry present in the record.
///
/// Falls back to the catch-all constructor when nothing matches, so there is
/// always something to build.
pub fn identify_event_kind_constructor(data: &EventData) -> EventConstructor {
    resolve(data).construct
}

/// Tagged form of [`identify_event_kind_constructor`]
pub fn classify(data: &EventData) -> EventKind {
    resolve(data).kind
}

/// Classifies the record and builds the matching typed variant.
///
/// A record whose fields do not fit its kind's shape is built with the
/// catch-all constructor instead, keeping the raw fields.
pub fn decode_event(data: &EventData) -> Result<VideoRoomEvent> {
    let entry = resolve(data);
    match (entry.construct)(data) {
        Err(e) if !entry.kind.is_catch_all() => {
            tracing::warn!(
                "Failed to decode {} event, falling back to {}: {}",
                entry.kind,
                registry::catch_all().kind,
                e
            );
            (registry::catch_all().construct)(data)
        }
        result => result,
    }
}

fn resolve(data: &EventData) -> &'static RegistryEntry {
    first_match(data).unwrap_or_else(|| {
        report_unclassified(data);
        registry::catch_all()
    })
}
