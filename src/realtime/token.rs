use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::CentrifugoConfig;
use crate::error::Result;
use crate::models::SessionToken;
use crate::realtime::TokenSigner;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// HS256 connection tokens over the pre-shared Centrifugo secret.
pub struct HsTokenSigner {
    secret: String,
    ttl: Duration,
}

impl HsTokenSigner {
    pub fn new(config: &CentrifugoConfig) -> Self {
        Self {
            secret: config.token_secret.clone(),
            ttl: Duration::hours(config.token_ttl_hours as i64),
        }
    }
}

impl TokenSigner for HsTokenSigner {
    fn issue(&self, username: &str) -> Result<SessionToken> {
        let exp = Utc::now() + self.ttl;

        let claims = Claims {
            sub: username.to_string(),
            exp: exp.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(SessionToken { token, exp })
    }
}
