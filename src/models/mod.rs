mod broadcast;
mod live;
mod message;
mod participant;
mod realtime;
mod recording;
mod stream;

pub use broadcast::{Broadcast, BroadcastChanges, CreateBroadcast, Lifecycle, NewBroadcast, UpdateBroadcast};
pub use live::LiveStream;
pub use message::{
    AddReaction, ChatMessage, NewChatMessage, PostChatMessage, ReactionChange, ReactionRemoval,
    RemoveReaction,
};
pub use participant::{Participant, RegisterParticipant};
pub use realtime::{ChannelEvent, SessionToken, EVENT_CHAT_CLEAR, EVENT_CHAT_REACTIONS};
pub use recording::{
    NewRecording, RecordingEvent, RecordingSummary, RecordingWebhook, StoredRecording,
};
pub use stream::{StreamDescription, StreamProfile, UpdateStreamDescription};

// Stable per-field validation messages. Callers key off these strings, so
// changing one is a breaking change.
pub const MSG_ID_EMPTY: &str = "id is empty";
pub const MSG_NAME_EMPTY: &str = "name is empty";
pub const MSG_DESCRIPTION_EMPTY: &str = "description is empty";
pub const MSG_OWNER_EMPTY: &str = "owner is empty";
pub const MSG_STREAM_KEY_EMPTY: &str = "stream_key is empty";
pub const MSG_START_TIME_EMPTY: &str = "start_time is empty";
pub const MSG_USERNAME_EMPTY: &str = "username is empty";
pub const MSG_FULLNAME_EMPTY: &str = "fullname is empty";
pub const MSG_TEXT_EMPTY: &str = "text is empty";
pub const MSG_AVATAR_EMPTY: &str = "avatar is empty";
pub const MSG_TIME_EMPTY: &str = "time is empty";
pub const MSG_IS_ANON_EMPTY: &str = "is_anon is empty";
pub const MSG_IS_QUESTION_EMPTY: &str = "is_question is empty";
pub const MSG_TYPE_EMPTY: &str = "type is empty";
pub const MSG_EMAIL_EMPTY: &str = "email is empty";
pub const MSG_HOST_EMAIL_EMPTY: &str = "host_email is empty";
pub const MSG_TOPIC_EMPTY: &str = "topic is empty";
