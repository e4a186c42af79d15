// Messaging module - Event classification and routing
pub mod classifier;
pub mod event;
pub mod registry;
pub mod router;

pub use classifier::{
    classify, decode_event, identify_event_kind_constructor, identify_event_kind_name,
};
pub use event::{EventKind, VideoRoomEvent};
pub use registry::{EventConstructor, RegistryEntry, EVENT_KINDS};
pub use router::EventRouter;
