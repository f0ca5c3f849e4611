// Adapters layer: concrete collaborators (gateway, Rekognition, Pinata) and
// the deployment wrappers that translate platform invocations.

pub mod http_server;
pub mod ipfs;
pub mod lambda;
pub mod pinata;
pub mod rekognition;

use crate::config::AdapterConfig;
use crate::core::pipeline::ModerationPipeline;
use crate::utils::error::Result;
use ipfs::IpfsGatewayFetcher;
use pinata::PinataPublisher;
use rekognition::RekognitionClassifier;

pub type ProductionPipeline =
    ModerationPipeline<IpfsGatewayFetcher, RekognitionClassifier, PinataPublisher>;

/// Wires the production collaborators from a loaded configuration.
pub async fn build_pipeline(config: &AdapterConfig) -> Result<ProductionPipeline> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("ipfs-moderation-adapter/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let fetcher = IpfsGatewayFetcher::from_config(client.clone(), config);
    let classifier = RekognitionClassifier::from_config(config).await;
    let publisher = PinataPublisher::from_config(client, config);

    Ok(ModerationPipeline::new(fetcher, classifier, publisher)
        .with_stage_timeout(config.stage_timeout()))
}
