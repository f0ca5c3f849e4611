use crate::config::AdapterConfig;
use crate::domain::model::{ClassificationResult, ModerationLabel};
use crate::domain::ports::ModerationClassifier;
use crate::utils::error::{AdapterError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::config::Region;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::operation::detect_moderation_labels::DetectModerationLabelsOutput;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;
use aws_sdk_rekognition::Client as RekognitionClient;

/// AWS Rekognition `DetectModerationLabels` on inline image bytes.
#[derive(Debug, Clone)]
pub struct RekognitionClassifier {
    client: RekognitionClient,
    min_confidence: Option<f32>,
}

impl RekognitionClassifier {
    pub fn new(client: RekognitionClient, min_confidence: Option<f32>) -> Self {
        Self {
            client,
            min_confidence,
        }
    }

    /// Credentials come from the default AWS provider chain
    /// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profile, role).
    pub async fn from_config(config: &AdapterConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Self::new(RekognitionClient::new(&sdk_config), config.min_confidence)
    }
}

#[async_trait]
impl ModerationClassifier for RekognitionClassifier {
    async fn classify(&self, image: Vec<u8>) -> Result<ClassificationResult> {
        tracing::debug!("Calling Rekognition with {} bytes", image.len());

        let output = self
            .client
            .detect_moderation_labels()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .set_min_confidence(self.min_confidence)
            .send()
            .await
            .map_err(|e| AdapterError::classification(DisplayErrorContext(&e).to_string()))?;

        Ok(classification_from_output(&output))
    }
}

/// Keeps Rekognition's label order; absent parent names become "".
pub fn classification_from_output(output: &DetectModerationLabelsOutput) -> ClassificationResult {
    let moderation_labels = output
        .moderation_labels()
        .iter()
        .map(|label| ModerationLabel {
            name: label.name().unwrap_or_default().to_string(),
            parent_name: label.parent_name().unwrap_or_default().to_string(),
            confidence: label.confidence().unwrap_or_default(),
        })
        .collect();

    ClassificationResult {
        moderation_labels,
        moderation_model_version: output
            .moderation_model_version()
            .unwrap_or_default()
            .to_string(),
    }
}
