//! HTTP directory provider

use super::{DirectoryProvider, FetchError, FetchResult};
use crate::directory::PositionRecord;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Connection settings for the directory API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the directory API, e.g. `https://hr.example.com/api`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteConfig {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

/// Directory provider backed by the HR portal's REST API.
pub struct HttpDirectoryClient {
    client: Client,
    config: RemoteConfig,
}

impl HttpDirectoryClient {
    pub fn new(config: RemoteConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl DirectoryProvider for HttpDirectoryClient {
    async fn fetch_snapshot(&self) -> FetchResult<Vec<PositionRecord>> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(alias = "items", alias = "records")]
            data: Vec<PositionRecord>,
        }

        let url = format!("{}/positions", self.config.base_url);
        debug!(%url, "fetching directory snapshot");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Api(format!(
                "directory API error: {}",
                resp.status()
            )));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        Ok(result.data)
    }
}
