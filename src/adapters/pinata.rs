use crate::config::AdapterConfig;
use crate::domain::model::ClassificationResult;
use crate::domain::ports::ContentPublisher;
use crate::utils::error::{AdapterError, Result};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum PinataCredentials {
    ApiKey { key: String, secret: String },
    Jwt(String),
}

impl PinataCredentials {
    /// A JWT wins over the key pair when both are configured.
    pub fn from_config(config: &AdapterConfig) -> Option<Self> {
        if let Some(jwt) = &config.pinata_jwt {
            return Some(Self::Jwt(jwt.clone()));
        }
        match (&config.pinata_api_key, &config.pinata_secret_api_key) {
            (Some(key), Some(secret)) => Some(Self::ApiKey {
                key: key.clone(),
                secret: secret.clone(),
            }),
            _ => None,
        }
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey { key, secret } => request
                .header("pinata_api_key", key)
                .header("pinata_secret_api_key", secret),
            Self::Jwt(token) => request.bearer_auth(token),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinJsonRequest<'a> {
    pinata_content: &'a ClassificationResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinJsonResponse {
    ipfs_hash: String,
}

/// Pins JSON documents through Pinata's `pinJSONToIPFS` endpoint.
#[derive(Debug, Clone)]
pub struct PinataPublisher {
    client: Client,
    api_url: String,
    credentials: Option<PinataCredentials>,
}

impl PinataPublisher {
    pub fn new(
        client: Client,
        api_url: impl Into<String>,
        credentials: Option<PinataCredentials>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn from_config(client: Client, config: &AdapterConfig) -> Self {
        Self::new(
            client,
            config.pinata_api_url.clone(),
            PinataCredentials::from_config(config),
        )
    }
}

impl ContentPublisher for PinataPublisher {
    async fn publish(&self, content: &ClassificationResult) -> Result<String> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| AdapterError::publish("Pinata credentials are not configured"))?;

        let url = format!("{}/pinning/pinJSONToIPFS", self.api_url);
        let request = self.client.post(&url).json(&PinJsonRequest {
            pinata_content: content,
        });

        let response = credentials
            .apply(request)
            .send()
            .await
            .map_err(|e| AdapterError::publish(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::publish(format!(
                "Pinata returned {}: {}",
                status, body
            )));
        }

        let pinned: PinJsonResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::publish(format!("unexpected Pinata response: {}", e)))?;

        tracing::debug!("Pinned classification as {}", pinned.ipfs_hash);
        Ok(pinned.ipfs_hash)
    }
}
