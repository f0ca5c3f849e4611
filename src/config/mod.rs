#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.ipfs.io";
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";
pub const DEFAULT_STAGE_TIMEOUT_SECS: u64 = 30;
/// Rekognition rejects inline images larger than 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Process-wide settings, loaded once at startup and never mutated.
///
/// Missing credentials are accepted here; the collaborator that needs them
/// fails at call time instead.
#[derive(Clone)]
pub struct AdapterConfig {
    pub gateway_url: String,
    pub pinata_api_url: String,
    pub pinata_api_key: Option<String>,
    pub pinata_secret_api_key: Option<String>,
    pub pinata_jwt: Option<String>,
    pub aws_region: Option<String>,
    pub min_confidence: Option<f32>,
    pub stage_timeout_secs: u64,
    pub max_image_bytes: u64,
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            gateway_url: non_empty("IPFS_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            pinata_api_url: non_empty("PINATA_API_URL")
                .unwrap_or_else(|| DEFAULT_PINATA_API_URL.to_string()),
            pinata_api_key: non_empty("PINATA_API_KEY"),
            pinata_secret_api_key: non_empty("PINATA_SECRET_API_KEY"),
            pinata_jwt: non_empty("PINATA_JWT"),
            aws_region: non_empty("AWS_REGION"),
            min_confidence: non_empty("REKOGNITION_MIN_CONFIDENCE")
                .map(|v| parse_number("REKOGNITION_MIN_CONFIDENCE", &v))
                .transpose()?,
            stage_timeout_secs: non_empty("STAGE_TIMEOUT_SECS")
                .map(|v| parse_number("STAGE_TIMEOUT_SECS", &v))
                .transpose()?
                .unwrap_or(DEFAULT_STAGE_TIMEOUT_SECS),
            max_image_bytes: non_empty("MAX_IMAGE_BYTES")
                .map(|v| parse_number("MAX_IMAGE_BYTES", &v))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_IMAGE_BYTES),
        })
    }

    pub fn stage_timeout(&self) -> Duration {
        Duration::from_secs(self.stage_timeout_secs)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            pinata_api_url: DEFAULT_PINATA_API_URL.to_string(),
            pinata_api_key: None,
            pinata_secret_api_key: None,
            pinata_jwt: None,
            aws_region: None,
            min_confidence: None,
            stage_timeout_secs: DEFAULT_STAGE_TIMEOUT_SECS,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| AdapterError::ConfigError {
        message: format!("{} must be a number, got {:?}", key, value),
    })
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<set>"
    } else {
        "<unset>"
    }
}

// 不把金鑰印進日誌
impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("gateway_url", &self.gateway_url)
            .field("pinata_api_url", &self.pinata_api_url)
            .field("pinata_api_key", &redact(&self.pinata_api_key))
            .field("pinata_secret_api_key", &redact(&self.pinata_secret_api_key))
            .field("pinata_jwt", &redact(&self.pinata_jwt))
            .field("aws_region", &self.aws_region)
            .field("min_confidence", &self.min_confidence)
            .field("stage_timeout_secs", &self.stage_timeout_secs)
            .field("max_image_bytes", &self.max_image_bytes)
            .finish()
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("IPFS_GATEWAY_URL", &self.gateway_url)?;
        validation::validate_url("PINATA_API_URL", &self.pinata_api_url)?;

        validation::validate_positive_number("STAGE_TIMEOUT_SECS", self.stage_timeout_secs, 1)?;
        validation::validate_positive_number("MAX_IMAGE_BYTES", self.max_image_bytes, 1)?;

        if let Some(confidence) = self.min_confidence {
            validation::validate_range("REKOGNITION_MIN_CONFIDENCE", confidence, 0.0, 100.0)?;
        }

        if let Some(region) = &self.aws_region {
            validation::validate_non_empty_string("AWS_REGION", region)?;
        }

        if self.pinata_jwt.is_none()
            && (self.pinata_api_key.is_none() || self.pinata_secret_api_key.is_none())
        {
            tracing::warn!("⚠️ Pinata credentials are not configured, publishing will fail");
        }

        tracing::info!("✅ Adapter configuration validation passed");
        Ok(())
    }
}
