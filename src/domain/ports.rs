use crate::domain::model::ClassificationResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads a complete object from the content-addressed network.
pub trait ContentFetcher: Send + Sync {
    fn fetch(&self, content_hash: &str)
        -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

#[async_trait]
pub trait ModerationClassifier: Send + Sync {
    async fn classify(&self, image: Vec<u8>) -> Result<ClassificationResult>;
}

/// Pins a classification and returns the network's native identifier (a CIDv0).
pub trait ContentPublisher: Send + Sync {
    fn publish(
        &self,
        content: &ClassificationResult,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
