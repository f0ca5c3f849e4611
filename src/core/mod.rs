pub mod pipeline;
pub mod reference;

pub use crate::domain::model::{ClassificationResult, JobRequest, ResponseEnvelope};
pub use crate::domain::ports::{ContentFetcher, ContentPublisher, ModerationClassifier};
pub use crate::utils::error::Result;
