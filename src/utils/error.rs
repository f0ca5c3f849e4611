use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("No data")]
    MissingInput,

    #[error("Job run ID required")]
    MissingJobId,

    #[error("Content hash required")]
    MissingContentHash,

    #[error("Failed to fetch content: {message}")]
    FetchFailure { message: String },

    #[error("Moderation classification failed: {message}")]
    ClassificationFailure { message: String },

    #[error("Failed to publish classification: {message}")]
    PublishFailure { message: String },

    #[error("Invalid content identifier {identifier}: {reason}")]
    InvalidReference { identifier: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端送來的請求不完整
    Input,
    /// 外部服務 (gateway / classifier / pinning) 失敗
    Upstream,
    Config,
}

impl AdapterError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchFailure {
            message: message.into(),
        }
    }

    pub fn classification(message: impl Into<String>) -> Self {
        Self::ClassificationFailure {
            message: message.into(),
        }
    }

    pub fn publish(message: impl Into<String>) -> Self {
        Self::PublishFailure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AdapterError::MissingInput
            | AdapterError::MissingJobId
            | AdapterError::MissingContentHash => ErrorCategory::Input,
            AdapterError::ConfigError { .. }
            | AdapterError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            _ => ErrorCategory::Upstream,
        }
    }

    /// Every failure is terminal for the job and reported as a 500.
    pub fn status_code(&self) -> u16 {
        500
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
