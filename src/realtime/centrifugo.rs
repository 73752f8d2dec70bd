use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::CentrifugoConfig;
use crate::error::{AppError, Result};
use crate::realtime::RealtimeBus;

#[derive(Serialize)]
struct PublishCommand<'a> {
    method: &'static str,
    params: PublishParams<'a>,
}

#[derive(Serialize)]
struct PublishParams<'a> {
    channel: &'a str,
    data: serde_json::Value,
}

pub struct CentrifugoClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl CentrifugoClient {
    pub fn new(config: &CentrifugoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Realtime(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl RealtimeBus for CentrifugoClient {
    async fn publish(&self, channel: &str, data: serde_json::Value) -> Result<()> {
        let command = PublishCommand {
            method: "publish",
            params: PublishParams { channel, data },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("apikey {}", self.api_key))
            .json(&command)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout("centrifugo")
                } else {
                    AppError::Realtime(e.to_string())
                }
            })?;

        response
            .error_for_status()
            .map_err(|e| AppError::Realtime(e.to_string()))?;

        Ok(())
    }
}
