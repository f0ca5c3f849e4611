use crate::core::reference::PublishedReference;
use crate::domain::model::{JobRequest, ModerationPayload, ResponseEnvelope, ValidatedJob};
use crate::domain::ports::{ContentFetcher, ContentPublisher, ModerationClassifier};
use crate::utils::error::{AdapterError, Result};
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_STAGE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy)]
enum Stage {
    Fetch,
    Classify,
    Publish,
}

impl Stage {
    fn failure(self, message: String) -> AdapterError {
        match self {
            Stage::Fetch => AdapterError::fetch(message),
            Stage::Classify => AdapterError::classification(message),
            Stage::Publish => AdapterError::publish(message),
        }
    }

    /// Collaborator errors are reported under the stage they happened in.
    fn wrap(self, err: AdapterError) -> AdapterError {
        match (self, &err) {
            (Stage::Fetch, AdapterError::FetchFailure { .. })
            | (Stage::Classify, AdapterError::ClassificationFailure { .. })
            | (Stage::Publish, AdapterError::PublishFailure { .. }) => err,
            _ => self.failure(err.to_string()),
        }
    }
}

/// fetch → classify → publish → encode, one job at a time, no retries.
pub struct ModerationPipeline<F, C, P> {
    fetcher: F,
    classifier: C,
    publisher: P,
    stage_timeout: Duration,
}

impl<F, C, P> ModerationPipeline<F, C, P>
where
    F: ContentFetcher,
    C: ModerationClassifier,
    P: ContentPublisher,
{
    pub fn new(fetcher: F, classifier: C, publisher: P) -> Self {
        Self {
            fetcher,
            classifier,
            publisher,
            stage_timeout: DEFAULT_STAGE_TIMEOUT,
        }
    }

    pub fn with_stage_timeout(mut self, stage_timeout: Duration) -> Self {
        self.stage_timeout = stage_timeout;
        self
    }

    /// Runs one job. Never fails: every error becomes an errored envelope
    /// carrying the caller's job id when it was supplied.
    pub async fn handle(&self, request: &JobRequest) -> ResponseEnvelope {
        match self.run(request).await {
            Ok((job, payload)) => {
                tracing::info!(
                    job_run_id = %job.job_id,
                    labels = payload.classification.moderation_labels.len(),
                    result = %payload.result,
                    "✅ Moderation job completed"
                );
                ResponseEnvelope::success(job.job_id, payload)
            }
            Err(e) => {
                tracing::error!(
                    job_run_id = ?request.id,
                    category = ?e.category(),
                    "❌ Moderation job failed: {}",
                    e
                );
                ResponseEnvelope::errored(request.id.clone(), &e)
            }
        }
    }

    async fn run(&self, request: &JobRequest) -> Result<(ValidatedJob, ModerationPayload)> {
        let job = request.validate()?;

        tracing::debug!(job_run_id = %job.job_id, hash = %job.content_hash, "Fetching image");
        let image = self
            .bounded(Stage::Fetch, self.fetcher.fetch(&job.content_hash))
            .await?;
        tracing::debug!(job_run_id = %job.job_id, bytes = image.len(), "Image fetched");

        let classification = self
            .bounded(Stage::Classify, self.classifier.classify(image))
            .await?;
        tracing::debug!(
            job_run_id = %job.job_id,
            labels = classification.moderation_labels.len(),
            model_version = %classification.moderation_model_version,
            "Image classified"
        );

        let identifier = self
            .bounded(Stage::Publish, self.publisher.publish(&classification))
            .await?;
        tracing::debug!(job_run_id = %job.job_id, ipfs_hash = %identifier, "Classification pinned");

        let reference = PublishedReference::from_native(identifier)?;

        Ok((
            job,
            ModerationPayload {
                classification,
                result: reference.encoded_reference,
            },
        ))
    }

    async fn bounded<T>(&self, stage: Stage, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.stage_timeout, call).await {
            Ok(result) => result.map_err(|e| stage.wrap(e)),
            Err(_) => Err(stage.failure(format!(
                "timed out after {}ms",
                self.stage_timeout.as_millis()
            ))),
        }
    }
}
