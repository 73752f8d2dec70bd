use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub centrifugo: CentrifugoConfig,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Upper bound on waiting for a pool slot; a saturated database must not
    /// stall request workers indefinitely.
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub op_timeout_secs: u64,
}

/// Real-time bus (Centrifugo-style publish API) plus the pre-shared secret
/// used to mint connection tokens for subscribers.
#[derive(Debug, Clone, Deserialize)]
pub struct CentrifugoConfig {
    pub api_url: String,
    pub api_key: String,
    pub token_secret: String,
    pub token_ttl_hours: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// Empty host puts the mail sender into no-op mode (logs only).
    pub host: String,
    pub port: u16,
    pub from: String,
    /// Base URL the recording link in notification mails points at.
    pub link_base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "postgres://localhost/live_admin")?
            .set_default("database.max_connections", 10)?
            .set_default("database.acquire_timeout_secs", 5)?
            .set_default("redis.url", "redis://localhost:6379")?
            .set_default("redis.op_timeout_secs", 5)?
            .set_default("centrifugo.api_url", "http://localhost:8000/api")?
            .set_default("centrifugo.api_key", "development-api-key")?
            .set_default("centrifugo.token_secret", "development-secret-change-in-production")?
            .set_default("centrifugo.token_ttl_hours", 10)?
            .set_default("centrifugo.request_timeout_secs", 5)?
            .set_default("smtp.host", "")?
            .set_default("smtp.port", 25)?
            .set_default("smtp.from", "Recordings <recordings@localhost>")?
            .set_default("smtp.link_base_url", "https://localhost")?
            .set_default("smtp.timeout_secs", 10)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    #[cfg(test)]
    pub fn test_defaults() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/live_admin_test".into(),
                max_connections: 5,
                acquire_timeout_secs: 5,
            },
            redis: RedisConfig {
                url: "redis://127.0.0.1:6379/0".into(),
                op_timeout_secs: 5,
            },
            centrifugo: CentrifugoConfig {
                api_url: "http://localhost:8000/api".into(),
                api_key: "test-api-key".into(),
                token_secret: "test-secret".into(),
                token_ttl_hours: 10,
                request_timeout_secs: 5,
            },
            smtp: SmtpConfig {
                host: String::new(),
                port: 25,
                from: "Recordings <recordings@localhost>".into(),
                link_base_url: "https://localhost".into(),
                timeout_secs: 10,
            },
        }
    }
}
