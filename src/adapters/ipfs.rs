use crate::config::AdapterConfig;
use crate::domain::ports::ContentFetcher;
use crate::utils::error::{AdapterError, Result};
use reqwest::Client;

/// Reads objects through a public IPFS HTTP gateway.
#[derive(Debug, Clone)]
pub struct IpfsGatewayFetcher {
    client: Client,
    gateway_url: String,
    max_bytes: u64,
}

impl IpfsGatewayFetcher {
    pub fn new(client: Client, gateway_url: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            client,
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    pub fn from_config(client: Client, config: &AdapterConfig) -> Self {
        Self::new(client, config.gateway_url.clone(), config.max_image_bytes)
    }

    pub fn content_url(&self, content_hash: &str) -> String {
        format!("{}/ipfs/{}", self.gateway_url, content_hash)
    }
}

impl ContentFetcher for IpfsGatewayFetcher {
    async fn fetch(&self, content_hash: &str) -> Result<Vec<u8>> {
        let url = self.content_url(content_hash);
        tracing::info!("Fetching {}", url);

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::fetch(format!(
                "gateway returned {} for {}",
                status, content_hash
            )));
        }

        // 分塊讀完整個物件才交給分類器
        let mut image = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AdapterError::fetch(format!("stream from {} broke: {}", url, e)))?
        {
            if (image.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(AdapterError::fetch(format!(
                    "{} exceeds the {} byte image limit",
                    content_hash, self.max_bytes
                )));
            }
            image.extend_from_slice(&chunk);
        }

        if image.is_empty() {
            return Err(AdapterError::fetch(format!("{} is empty", content_hash)));
        }

        tracing::debug!("Read {} bytes from gateway", image.len());
        Ok(image)
    }
}
