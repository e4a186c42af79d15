//! Synchronous VideoRoom requests and the responses the plugin returns for them.

use serde::{Deserialize, Serialize};

use super::common::{Participant, Publisher};
use crate::types::constants::{ptypes, requests};

/// `{"request": "list"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListRoomsRequest {
    pub request: String,
}

impl ListRoomsRequest {
    pub fn new() -> Self {
        Self {
            request: requests::LIST.to_string(),
        }
    }
}

impl Default for ListRoomsRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListParticipantsRequest {
    pub request: String,
    pub room: u64,
}

impl ListParticipantsRequest {
    pub fn new(room: u64) -> Self {
        Self {
            request: requests::LIST_PARTICIPANTS.to_string(),
            room,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListParticipantsResponse {
    pub videoroom: String,
    pub room: u64,
    pub participants: Vec<Participant>,
}

/// Join a room either as a publisher or as a subscriber to one feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinRequest {
    pub request: String,
    pub ptype: String,
    pub room: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<u64>,
}

impl JoinRequest {
    pub fn publisher(room: u64, id: u64, display: impl Into<String>) -> Self {
        Self {
            request: requests::JOIN.to_string(),
            ptype: ptypes::PUBLISHER.to_string(),
            room,
            id: Some(id),
            display: Some(display.into()),
            feed: None,
        }
    }

    pub fn subscriber(room: u64, feed: u64) -> Self {
        Self {
            request: requests::JOIN.to_string(),
            ptype: ptypes::SUBSCRIBER.to_string(),
            room,
            id: None,
            display: None,
            feed: Some(feed),
        }
    }
}

/// Reply to a publisher join (`"videoroom": "joined"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JoinResponse {
    pub videoroom: String,
    pub room: u64,
    pub description: String,
    pub id: u64,
    pub private_id: u64,
    pub publishers: Vec<Publisher>,
}

/// Reply to a subscriber join (`"videoroom": "attached"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SubscribeResponse {
    pub videoroom: String,
    pub room: u64,
    pub feed: u64,
    pub display: String,
}

/// `{"request": "start"}`, sent by a subscriber with its SDP answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartRequest {
    pub request: String,
}

impl StartRequest {
    pub fn new() -> Self {
        Self {
            request: requests::START.to_string(),
        }
    }
}

impl Default for StartRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RtpForwardRequest {
    pub request: String,
    pub room: u64,
    pub publisher_id: u64,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_family: Option<String>,
    pub audio_port: u64,
    pub video_port: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl RtpForwardRequest {
    pub fn new(room: u64, publisher_id: u64, host: impl Into<String>) -> Self {
        Self {
            request: requests::RTP_FORWARD.to_string(),
            room,
            publisher_id,
            host: host.into(),
            host_family: None,
            audio_port: 0,
            video_port: 0,
            secret: None,
        }
    }

    pub fn with_ports(mut self, audio_port: u64, video_port: u64) -> Self {
        self.audio_port = audio_port;
        self.video_port = video_port;
        self
    }

    pub fn with_host_family(mut self, host_family: impl Into<String>) -> Self {
        self.host_family = Some(host_family.into());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopRtpForwardRequest {
    pub request: String,
    pub room: u64,
    pub publisher_id: u64,
    pub stream_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl StopRtpForwardRequest {
    pub fn new(room: u64, publisher_id: u64, stream_id: u64) -> Self {
        Self {
            request: requests::STOP_RTP_FORWARD.to_string(),
            room,
            publisher_id,
            stream_id,
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListForwardersRequest {
    pub request: String,
    pub room: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl ListForwardersRequest {
    pub fn new(room: u64) -> Self {
        Self {
            request: requests::LIST_FORWARDERS.to_string(),
            room,
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListForwardersResponse {
    pub videoroom: String,
    pub room: u64,
    #[serde(rename = "rtp_forwarders")]
    pub forwarders: Vec<PublisherForwarders>,
}

/// All RTP forwarders attached to one publisher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PublisherForwarders {
    pub display: String,
    pub publisher_id: u64,
    #[serde(rename = "rtp_forwarder")]
    pub forwarders: Vec<Forwarder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Forwarder {
    pub audio_stream_id: u64,
    pub video_stream_id: u64,
    pub data_stream_id: u64,
    pub ip: String,
    pub port: u64,
    pub rtcp_port: u64,
    pub ssrc: u64,
    pub pt: u64,
    pub substream: u64,
    pub srtp: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SdpPayload {
    pub sdp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SdpMessage {
    pub sdp: SdpPayload,
}
