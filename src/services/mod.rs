//! The coordination layer. Each service orchestrates validation, store
//! writes, relay publishes and notifications across the collaborator seams;
//! none of them holds mutable state of its own.

mod admin;
mod broadcasts;
mod chat;
mod images;
mod live;
mod presence;
mod recordings;
mod stream;

pub use admin::AdminService;
pub use broadcasts::BroadcastService;
pub use chat::ChatService;
pub use images::ImageService;
pub use live::LiveService;
pub use presence::PresenceService;
pub use recordings::RecordingService;
pub use stream::StreamService;

use std::sync::Arc;

use crate::mail::MailSender;
use crate::realtime::{RealtimeBus, TokenSigner};
use crate::store::{
    BroadcastStore, IdentityStore, ImageStore, LiveStore, MessageStore, ParticipantCache,
    RecordingStore, StreamStore,
};

pub struct Services {
    pub admin: AdminService,
    pub broadcasts: BroadcastService,
    pub chat: ChatService,
    pub presence: PresenceService,
    pub recordings: RecordingService,
    pub streams: StreamService,
    pub images: ImageService,
    pub live: LiveService,
}

pub struct Collaborators {
    pub identity: Arc<dyn IdentityStore>,
    pub broadcasts: Arc<dyn BroadcastStore>,
    pub messages: Arc<dyn MessageStore>,
    pub images: Arc<dyn ImageStore>,
    pub streams: Arc<dyn StreamStore>,
    pub live: Arc<dyn LiveStore>,
    pub recordings: Arc<dyn RecordingStore>,
    pub participants: Arc<dyn ParticipantCache>,
    pub bus: Arc<dyn RealtimeBus>,
    pub signer: Arc<dyn TokenSigner>,
    pub mail: Arc<dyn MailSender>,
}

impl Services {
    pub fn new(c: Collaborators) -> Self {
        Self {
            admin: AdminService::new(c.identity.clone(), c.signer),
            broadcasts: BroadcastService::new(c.broadcasts, c.identity),
            chat: ChatService::new(c.messages.clone(), c.bus.clone()),
            presence: PresenceService::new(c.participants),
            recordings: RecordingService::new(c.recordings, c.mail),
            streams: StreamService::new(c.streams, c.messages, c.bus),
            images: ImageService::new(c.images),
            live: LiveService::new(c.live),
        }
    }
}
