// VideoRoom plugin schema - Typed payload shapes exchanged with the plugin
pub mod common;
pub mod events;
pub mod requests;

pub use common::{Participant, ParticipantRef, Publisher};
pub use events::{
    ErrorEvent, JoiningEvent, JoiningParticipant, LeavingEvent, PublishersEvent, UnknownEvent,
    UnpublishedEvent,
};
pub use requests::{
    Forwarder, JoinRequest, JoinResponse, ListForwardersRequest, ListForwardersResponse,
    ListParticipantsRequest, ListParticipantsResponse, ListRoomsRequest, PublisherForwarders,
    RtpForwardRequest, SdpMessage, SdpPayload, StartRequest, StopRtpForwardRequest,
    SubscribeResponse,
};
