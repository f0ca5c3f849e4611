use crate::core::pipeline::ModerationPipeline;
use crate::domain::model::{JobRequest, ResponseEnvelope};
use crate::domain::ports::{ContentFetcher, ContentPublisher, ModerationClassifier};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Legacy invocation: the event is the job request and the reply is the
/// bare envelope.
pub async fn handle_event<F, C, P>(
    pipeline: &ModerationPipeline<F, C, P>,
    event: &Value,
) -> ResponseEnvelope
where
    F: ContentFetcher,
    C: ModerationClassifier,
    P: ContentPublisher,
{
    pipeline.handle(&JobRequest::from_value(event)).await
}

/// Proxy-style event carrying the job request as a JSON string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    pub fn from_envelope(envelope: &ResponseEnvelope) -> Result<Self> {
        Ok(Self {
            status_code: envelope.status_code(),
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: serde_json::to_string(envelope)?,
            is_base64_encoded: false,
        })
    }
}

pub async fn handle_event_v2<F, C, P>(
    pipeline: &ModerationPipeline<F, C, P>,
    event: &ProxyEvent,
) -> Result<ProxyResponse>
where
    F: ContentFetcher,
    C: ModerationClassifier,
    P: ContentPublisher,
{
    let request = event
        .body
        .as_deref()
        .map(|body| JobRequest::from_slice(body.as_bytes()))
        .unwrap_or_default();

    let envelope = pipeline.handle(&request).await;
    ProxyResponse::from_envelope(&envelope)
}
