/// Janus transport-level message types (the `janus` field)
pub mod janus_messages {
    pub const EVENT: &str = "event";
    pub const ACK: &str = "ack";
    pub const KEEPALIVE: &str = "keepalive";
}

/// VideoRoom plugin package name, as carried in `plugindata.plugin`
pub const VIDEOROOM_PLUGIN: &str = "janus.plugin.videoroom";

/// Field keys that identify a VideoRoom event kind (magic strings layer)
pub mod event_keys {
    pub const ERROR: &str = "error";
    pub const PUBLISHERS: &str = "publishers";
    pub const UNPUBLISHED: &str = "unpublished";
    pub const JOINING: &str = "joining";
    pub const LEAVING: &str = "leaving";
    /// Present on every VideoRoom plugin event; used as the catch-all
    pub const VIDEOROOM: &str = "videoroom";
}

/// VideoRoom request verbs (the `request` field)
pub mod requests {
    pub const LIST: &str = "list";
    pub const LIST_PARTICIPANTS: &str = "listparticipants";
    pub const JOIN: &str = "join";
    pub const START: &str = "start";
    pub const RTP_FORWARD: &str = "rtp_forward";
    pub const STOP_RTP_FORWARD: &str = "stop_rtp_forward";
    pub const LIST_FORWARDERS: &str = "listforwarders";
}

/// Participant types for join requests (the `ptype` field)
pub mod ptypes {
    pub const PUBLISHER: &str = "publisher";
    pub const SUBSCRIBER: &str = "subscriber";
}

/// Default heartbeat interval (milliseconds)
pub const HEARTBEAT_INTERVAL: u64 = 30000;

/// Default capacity of the typed event broadcast channel
pub const DEFAULT_EVENT_BUFFER: usize = 256;
