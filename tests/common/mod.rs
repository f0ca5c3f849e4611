#![allow(dead_code)]

use async_trait::async_trait;
use httpmock::prelude::*;
use httpmock::Mock;
use ipfs_moderation_adapter::adapters::ipfs::IpfsGatewayFetcher;
use ipfs_moderation_adapter::adapters::pinata::{PinataCredentials, PinataPublisher};
use ipfs_moderation_adapter::core::ModerationClassifier;
use ipfs_moderation_adapter::domain::model::{ClassificationResult, ModerationLabel};
use ipfs_moderation_adapter::{AdapterError, ModerationPipeline, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const IMAGE_HASH: &str = "QmWATWQ7fVPP2EFGu71UkfnqhYXDYH566qy47CnJDgvs8u";
pub const PINNED_HASH: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
pub const PINNED_BYTES32: &str =
    "0x9d6c2be50f706953479ab9df2ce3edca90b68053c00b3004b7f0accbe1e8eedf";
pub const IMAGE_BYTES: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Stands in for Rekognition; records the bytes it was given.
#[derive(Clone, Default)]
pub struct StubClassifier {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
    pub seen: Arc<std::sync::Mutex<Vec<u8>>>,
}

impl StubClassifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModerationClassifier for StubClassifier {
    async fn classify(&self, image: Vec<u8>) -> Result<ClassificationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = image;

        if self.fail {
            return Err(AdapterError::classification(
                "ThrottlingException: Rate exceeded",
            ));
        }

        Ok(sample_classification())
    }
}

pub fn sample_classification() -> ClassificationResult {
    ClassificationResult {
        moderation_labels: vec![
            ModerationLabel {
                name: "Middle Finger".to_string(),
                parent_name: "Rude Gestures".to_string(),
                confidence: 99.5,
            },
            ModerationLabel {
                name: "Rude Gestures".to_string(),
                parent_name: String::new(),
                confidence: 99.5,
            },
        ],
        moderation_model_version: "4.0".to_string(),
    }
}

pub type TestPipeline = ModerationPipeline<IpfsGatewayFetcher, StubClassifier, PinataPublisher>;

/// Gateway and Pinata both served by the same mock server.
pub fn pipeline(server: &MockServer, classifier: StubClassifier) -> TestPipeline {
    let client = reqwest::Client::new();
    let fetcher = IpfsGatewayFetcher::new(client.clone(), server.base_url(), 1024 * 1024);
    let publisher = PinataPublisher::new(
        client,
        server.base_url(),
        Some(PinataCredentials::ApiKey {
            key: "key".to_string(),
            secret: "secret".to_string(),
        }),
    );
    ModerationPipeline::new(fetcher, classifier, publisher)
}

pub fn mock_gateway(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/ipfs/{}", IMAGE_HASH));
        then.status(200)
            .header("Content-Type", "image/jpeg")
            .body(IMAGE_BYTES);
    })
}

pub fn mock_pinata(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/pinning/pinJSONToIPFS")
            .header("pinata_api_key", "key");
        then.status(200).json_body(serde_json::json!({
            "IpfsHash": PINNED_HASH,
            "PinSize": 212,
            "Timestamp": "2026-10-19T09:00:00.000Z"
        }));
    })
}
