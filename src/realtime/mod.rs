//! Real-time relay: best-effort, single-attempt publishes to a
//! Centrifugo-style HTTP API, plus the HS256 connection-token signer for
//! subscribers.

mod centrifugo;
mod token;

pub use centrifugo::CentrifugoClient;
pub use token::HsTokenSigner;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SessionToken;

#[async_trait]
pub trait RealtimeBus: Send + Sync {
    /// "Accepted by the bus", not "delivered". No retry, no buffering.
    async fn publish(&self, channel: &str, data: serde_json::Value) -> Result<()>;
}

pub trait TokenSigner: Send + Sync {
    fn issue(&self, username: &str) -> Result<SessionToken>;
}
