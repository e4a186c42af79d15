use serde::{Deserialize, Serialize};

use super::constants::{janus_messages, VIDEOROOM_PLUGIN};

/// Generic plugin event record: field name to opaque JSON value.
pub type EventData = serde_json::Map<String, serde_json::Value>;

/// The `plugindata` block of a Janus event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PluginData {
    pub plugin: String,
    #[serde(default)]
    pub data: EventData,
}

/// A Janus `event` message as received from the session transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventMsg {
    pub janus: String,
    #[serde(default)]
    pub session_id: u64,
    #[serde(default)]
    pub sender: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
    pub plugindata: PluginData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsep: Option<serde_json::Value>,
}

impl EventMsg {
    pub fn new(plugin: impl Into<String>, data: EventData) -> Self {
        Self {
            janus: janus_messages::EVENT.to_string(),
            session_id: 0,
            sender: 0,
            transaction: None,
            plugindata: PluginData {
                plugin: plugin.into(),
                data,
            },
            jsep: None,
        }
    }

    pub fn with_session(mut self, session_id: u64, sender: u64) -> Self {
        self.session_id = session_id;
        self.sender = sender;
        self
    }

    pub fn with_transaction(mut self, transaction: impl Into<String>) -> Self {
        self.transaction = Some(transaction.into());
        self
    }

    pub fn with_jsep(mut self, jsep: serde_json::Value) -> Self {
        self.jsep = Some(jsep);
        self
    }

    /// The generic record handed to the classifier
    pub fn data(&self) -> &EventData {
        &self.plugindata.data
    }

    /// Whether this event was emitted by the VideoRoom plugin
    pub fn is_videoroom(&self) -> bool {
        self.plugindata.plugin == VIDEOROOM_PLUGIN
    }
}

/// Acknowledgement returned by the server for a keep-alive request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeepAliveAck {
    pub janus: String,
    #[serde(default)]
    pub session_id: u64,
    #[serde(default)]
    pub transaction: String,
}

impl KeepAliveAck {
    pub fn new(session_id: u64, transaction: impl Into<String>) -> Self {
        Self {
            janus: janus_messages::ACK.to_string(),
            session_id,
            transaction: transaction.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_msg_from_wire() {
        let raw = json!({
            "janus": "event",
            "session_id": 1234,
            "sender": 5678,
            "plugindata": {
                "plugin": "janus.plugin.videoroom",
                "data": { "videoroom": "event", "room": 1234, "leaving": 42 }
            }
        });

        let message: EventMsg = serde_json::from_value(raw).unwrap();
        assert_eq!(message.janus, "event");
        assert_eq!(message.session_id, 1234);
        assert_eq!(message.sender, 5678);
        assert!(message.is_videoroom());
        assert_eq!(message.data().get("leaving"), Some(&json!(42)));
        assert_eq!(message.transaction, None);
        assert_eq!(message.jsep, None);
    }

    #[test]
    fn test_event_msg_serialization_skips_empty_options() {
        let message = EventMsg::new(VIDEOROOM_PLUGIN, EventData::new());

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains(r#""transaction":"#));
        assert!(!json.contains(r#""jsep":"#));
    }

    #[test]
    fn test_event_msg_builders() {
        let message = EventMsg::new("janus.plugin.echotest", EventData::new())
            .with_session(1, 2)
            .with_transaction("abc")
            .with_jsep(json!({ "type": "answer", "sdp": "v=0" }));

        assert!(!message.is_videoroom());
        assert_eq!(message.session_id, 1);
        assert_eq!(message.sender, 2);
        assert_eq!(message.transaction.as_deref(), Some("abc"));
        assert!(message.jsep.is_some());
    }

    #[test]
    fn test_keepalive_ack_from_wire() {
        let ack: KeepAliveAck =
            serde_json::from_value(json!({ "janus": "ack", "session_id": 9, "transaction": "t1" }))
                .unwrap();
        assert_eq!(ack, KeepAliveAck::new(9, "t1"));
    }
}
