use contact_relay::{ContactClient, ContactSubmission, RelayError};
use httpmock::prelude::*;
use std::time::Duration;

fn sample() -> ContactSubmission {
    ContactSubmission::new("Alex", "alex@example.com", "Hello")
}

#[tokio::test]
async fn test_submit_posts_json_and_reads_success() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "Alex",
                "email": "alex@example.com",
                "message": "Hello"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true}));
    });

    let client = ContactClient::new(server.url("/api/contact")).unwrap();
    let response = client.submit(&sample()).await.unwrap();

    api_mock.assert();
    assert!(response.success);
}

#[tokio::test]
async fn test_submit_reads_failure_body_from_500() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": false}));
    });

    let client = ContactClient::new(server.url("/api/contact")).unwrap();
    let response = client.submit(&sample()).await.unwrap();

    api_mock.assert();
    assert!(!response.success);
}

#[tokio::test]
async fn test_submit_rejects_unexpected_body() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let client = ContactClient::new(server.url("/api/contact")).unwrap();
    let result = client.submit(&sample()).await;

    api_mock.assert();
    assert!(matches!(result, Err(RelayError::SerializationError(_))));
}

#[tokio::test]
async fn test_submit_times_out() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(serde_json::json!({"success": true}));
    });

    let client =
        ContactClient::with_timeout(server.url("/api/contact"), Duration::from_millis(200))
            .unwrap();
    let result = client.submit(&sample()).await;

    match result {
        Err(e @ RelayError::HttpError(_)) => assert!(e.is_transient()),
        other => panic!("expected HttpError, got {:?}", other),
    }
}
