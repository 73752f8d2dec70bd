mod broadcasts;
mod identity;
mod images;
mod live;
mod messages;
mod recordings;
mod streams;

pub use broadcasts::PgBroadcastStore;
pub use identity::PgIdentityStore;
pub use images::PgImageStore;
pub use live::PgLiveStore;
pub use messages::PgMessageStore;
pub use recordings::PgRecordingStore;
pub use streams::PgStreamStore;
