use crate::utils::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound job as received from a Chainlink node: `{ "id": ..., "data": { "hash": ... } }`.
///
/// Every field is optional on the wire; [`JobRequest::validate`] decides which
/// one is missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRequest {
    pub id: Option<String>,
    pub data: Option<JobData>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobData {
    pub hash: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedJob {
    pub job_id: String,
    pub content_hash: String,
}

impl JobRequest {
    pub fn new(id: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            data: Some(JobData {
                hash: Some(hash.into()),
            }),
        }
    }

    /// Reads a request out of arbitrary JSON without failing, so the job id
    /// survives even when the rest of the body is malformed.
    pub fn from_value(value: &Value) -> Self {
        let id = value.get("id").and_then(|id| match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        let data = match value.get("data") {
            None | Some(Value::Null) => None,
            Some(data) => Some(JobData {
                hash: data
                    .get("hash")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        };

        Self { id, data }
    }

    /// Parses a raw body. Empty or non-JSON bodies become an empty request.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Checks `data`, then `id`, then `data.hash`; the first gap wins.
    pub fn validate(&self) -> Result<ValidatedJob> {
        let data = self.data.as_ref().ok_or(AdapterError::MissingInput)?;
        let job_id = self.id.clone().ok_or(AdapterError::MissingJobId)?;
        let content_hash = data.hash.clone().ok_or(AdapterError::MissingContentHash)?;

        Ok(ValidatedJob {
            job_id,
            content_hash,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModerationLabel {
    pub name: String,
    #[serde(default)]
    pub parent_name: String,
    pub confidence: f32,
}

/// Classifier output. Its JSON form is the document pinned to IPFS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassificationResult {
    pub moderation_labels: Vec<ModerationLabel>,
    #[serde(default)]
    pub moderation_model_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationPayload {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Errored,
}

/// Reply to the node. Built only through [`ResponseEnvelope::success`] and
/// [`ResponseEnvelope::errored`], so exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(rename = "jobRunID", skip_serializing_if = "Option::is_none")]
    job_run_id: Option<String>,
    status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ModerationPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    status_code: u16,
}

impl ResponseEnvelope {
    pub fn success(job_run_id: impl Into<String>, payload: ModerationPayload) -> Self {
        Self {
            job_run_id: Some(job_run_id.into()),
            status: JobStatus::Success,
            result: Some(payload.result.clone()),
            data: Some(payload),
            error: None,
            status_code: 200,
        }
    }

    pub fn errored(job_run_id: Option<String>, error: &AdapterError) -> Self {
        Self {
            job_run_id,
            status: JobStatus::Errored,
            data: None,
            result: None,
            error: Some(error.to_string()),
            status_code: error.status_code(),
        }
    }

    pub fn job_run_id(&self) -> Option<&str> {
        self.job_run_id.as_deref()
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn data(&self) -> Option<&ModerationPayload> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == JobStatus::Success
    }
}
