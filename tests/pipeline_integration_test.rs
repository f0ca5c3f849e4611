mod common;

use common::*;
use httpmock::prelude::*;
use ipfs_moderation_adapter::domain::model::JobStatus;
use ipfs_moderation_adapter::JobRequest;
use serde_json::json;

#[tokio::test]
async fn test_end_to_end_moderation_job() {
    let server = MockServer::start();
    let gateway = mock_gateway(&server);
    let pinata = server.mock(|when, then| {
        when.method(POST)
            .path("/pinning/pinJSONToIPFS")
            .header("pinata_api_key", "key")
            .header("pinata_secret_api_key", "secret")
            .json_body(json!({
                "pinataContent": {
                    "ModerationLabels": [
                        { "Name": "Middle Finger", "ParentName": "Rude Gestures", "Confidence": 99.5 },
                        { "Name": "Rude Gestures", "ParentName": "", "Confidence": 99.5 }
                    ],
                    "ModerationModelVersion": "4.0"
                }
            }));
        then.status(200).json_body(json!({ "IpfsHash": PINNED_HASH }));
    });

    let classifier = StubClassifier::default();
    let pipeline = pipeline(&server, classifier.clone());

    let envelope = pipeline.handle(&JobRequest::new("1", IMAGE_HASH)).await;

    gateway.assert();
    pinata.assert();
    assert_eq!(classifier.call_count(), 1);
    assert_eq!(classifier.seen.lock().unwrap().as_slice(), IMAGE_BYTES);

    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.job_run_id(), Some("1"));

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["jobRunID"], "1");
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["result"], PINNED_BYTES32);
    assert_eq!(value["result"], PINNED_BYTES32);
    assert_eq!(value["data"]["ModerationModelVersion"], "4.0");
    assert_eq!(value["data"]["ModerationLabels"][0]["Name"], "Middle Finger");
}

#[tokio::test]
async fn test_gateway_error_is_reported_without_classifying() {
    let server = MockServer::start();
    let gateway = server.mock(|when, then| {
        when.method(GET).path(format!("/ipfs/{}", IMAGE_HASH));
        then.status(504);
    });
    let pinata = mock_pinata(&server);

    let classifier = StubClassifier::default();
    let pipeline = pipeline(&server, classifier.clone());

    let envelope = pipeline.handle(&JobRequest::new("1", IMAGE_HASH)).await;

    gateway.assert();
    pinata.assert_hits(0);
    assert_eq!(classifier.call_count(), 0);
    assert_eq!(envelope.status_code(), 500);
    assert_eq!(envelope.status(), JobStatus::Errored);
    assert!(envelope.error().unwrap().contains("504"));
}

#[tokio::test]
async fn test_classifier_failure_never_pins() {
    let server = MockServer::start();
    let gateway = mock_gateway(&server);
    let pinata = mock_pinata(&server);

    let classifier = StubClassifier::failing();
    let pipeline = pipeline(&server, classifier.clone());

    let envelope = pipeline.handle(&JobRequest::new("1", IMAGE_HASH)).await;

    gateway.assert();
    pinata.assert_hits(0);
    assert_eq!(classifier.call_count(), 1);
    assert_eq!(envelope.status_code(), 500);
    assert_eq!(envelope.job_run_id(), Some("1"));
    assert_eq!(
        envelope.error(),
        Some("Moderation classification failed: ThrottlingException: Rate exceeded")
    );
}

#[tokio::test]
async fn test_pinata_failure_discards_labels() {
    let server = MockServer::start();
    let gateway = mock_gateway(&server);
    let pinata = server.mock(|when, then| {
        when.method(POST).path("/pinning/pinJSONToIPFS");
        then.status(500).body("Internal Server Error");
    });

    let pipeline = pipeline(&server, StubClassifier::default());

    let envelope = pipeline.handle(&JobRequest::new("1", IMAGE_HASH)).await;

    gateway.assert();
    pinata.assert_hits(1);
    assert_eq!(envelope.status_code(), 500);
    assert!(envelope.data().is_none());

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["status"], "errored");
    assert!(value.get("data").is_none());
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to publish classification"));
}

#[tokio::test]
async fn test_invalid_requests_touch_nothing() {
    let server = MockServer::start();
    let gateway = mock_gateway(&server);

    let pipeline = pipeline(&server, StubClassifier::default());

    for body in [json!({}), json!({ "data": {} }), json!({ "id": "1", "data": {} })] {
        let envelope = pipeline.handle(&JobRequest::from_value(&body)).await;
        assert_eq!(envelope.status_code(), 500);
        assert_eq!(envelope.status(), JobStatus::Errored);
        assert!(!envelope.error().unwrap().is_empty());
    }

    gateway.assert_hits(0);
}
