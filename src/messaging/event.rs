use crate::types::constants::event_keys;
use crate::videoroom::{
    ErrorEvent, JoiningEvent, LeavingEvent, PublishersEvent, UnknownEvent, UnpublishedEvent,
};

/// The closed set of VideoRoom event kinds, named by their identifying field key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Plugin-level error (`error` / `error_code`)
    Error,

    /// Publisher list update
    Publishers,

    /// A publisher stopped publishing
    Unpublished,

    /// A participant joined
    Joining,

    /// A participant left
    Leaving,

    /// Catch-all for any other `videoroom` event
    Unknown,
}

impl EventKind {
    /// Every kind, in declaration order
    pub const ALL: [EventKind; 6] = [
        Self::Error,
        Self::Publishers,
        Self::Unpublished,
        Self::Joining,
        Self::Leaving,
        Self::Unknown,
    ];

    /// Parse a field key into an EventKind
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            event_keys::ERROR => Some(Self::Error),
            event_keys::PUBLISHERS => Some(Self::Publishers),
            event_keys::UNPUBLISHED => Some(Self::Unpublished),
            event_keys::JOINING => Some(Self::Joining),
            event_keys::LEAVING => Some(Self::Leaving),
            event_keys::VIDEOROOM => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The field key that identifies this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => event_keys::ERROR,
            Self::Publishers => event_keys::PUBLISHERS,
            Self::Unpublished => event_keys::UNPUBLISHED,
            Self::Joining => event_keys::JOINING,
            Self::Leaving => event_keys::LEAVING,
            Self::Unknown => event_keys::VIDEOROOM,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A VideoRoom event decoded into its typed shape
#[derive(Debug, Clone, PartialEq)]
pub enum VideoRoomEvent {
    Error(ErrorEvent),
    Publishers(PublishersEvent),
    Unpublished(UnpublishedEvent),
    Joining(JoiningEvent),
    Leaving(LeavingEvent),
    Unknown(UnknownEvent),
}

impl VideoRoomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Error(_) => EventKind::Error,
            Self::Publishers(_) => EventKind::Publishers,
            Self::Unpublished(_) => EventKind::Unpublished,
            Self::Joining(_) => EventKind::Joining,
            Self::Leaving(_) => EventKind::Leaving,
            Self::Unknown(_) => EventKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_from_name() {
        assert_eq!(EventKind::from_name("error"), Some(EventKind::Error));
        assert_eq!(EventKind::from_name("publishers"), Some(EventKind::Publishers));
        assert_eq!(EventKind::from_name("unpublished"), Some(EventKind::Unpublished));
        assert_eq!(EventKind::from_name("joining"), Some(EventKind::Joining));
        assert_eq!(EventKind::from_name("leaving"), Some(EventKind::Leaving));
        assert_eq!(EventKind::from_name("videoroom"), Some(EventKind::Unknown));
        assert_eq!(EventKind::from_name("talking"), None);
    }

    #[test]
    fn test_event_kind_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_only_unknown_is_catch_all() {
        let catch_all: Vec<_> = EventKind::ALL
            .into_iter()
            .filter(EventKind::is_catch_all)
            .collect();
        assert_eq!(catch_all, vec![EventKind::Unknown]);
    }

    #[test]
    fn test_variant_kind() {
        let event = VideoRoomEvent::Leaving(LeavingEvent::default());
        assert_eq!(event.kind(), EventKind::Leaving);
        assert_eq!(event.kind().to_string(), "leaving");
    }
}
