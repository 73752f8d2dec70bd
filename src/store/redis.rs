use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::time::timeout;

use crate::error::{AppError, Result};
use crate::models::Participant;
use crate::store::{ParticipantCache, PARTICIPANT_TTL_SECS};

/// Channel-keyed participant hash in Redis. Expiry enforcement is entirely
/// Redis's; this side only resets the window on every write.
#[derive(Clone)]
pub struct RedisParticipantCache {
    conn: ConnectionManager,
    op_timeout: Duration,
}

impl RedisParticipantCache {
    pub fn new(conn: ConnectionManager, op_timeout: Duration) -> Self {
        Self { conn, op_timeout }
    }
}

#[async_trait]
impl ParticipantCache for RedisParticipantCache {
    async fn register(&self, channel: &str, participant: &Participant) -> Result<()> {
        let payload = serde_json::to_string(participant)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut conn = self.conn.clone();

        let _: () = timeout(
            self.op_timeout,
            conn.hset(channel, &participant.username, payload),
        )
        .await
        .map_err(|_| AppError::Timeout("redis"))??;

        let _: () = timeout(self.op_timeout, conn.expire(channel, PARTICIPANT_TTL_SECS))
            .await
            .map_err(|_| AppError::Timeout("redis"))??;

        Ok(())
    }

    async fn list(&self, channel: &str) -> Result<Vec<Participant>> {
        let mut conn = self.conn.clone();

        let fields: std::collections::HashMap<String, String> =
            timeout(self.op_timeout, conn.hgetall(channel))
                .await
                .map_err(|_| AppError::Timeout("redis"))??;

        let mut participants = Vec::with_capacity(fields.len());
        for (username, payload) in fields {
            match serde_json::from_str::<Participant>(&payload) {
                Ok(participant) => participants.push(participant),
                Err(e) => {
                    tracing::warn!("dropping undecodable participant {username} on {channel}: {e}")
                }
            }
        }

        Ok(participants)
    }
}
