use crate::helpers::{fixtures, TestApp};
use hyper::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_return_healthy_liveness() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"].as_str(), Some("healthy"));
    assert!(body.get("app").is_some());
    assert!(body.get("version").is_some());
}

#[tokio::test]
async fn it_should_report_ready_with_phrase_count() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"].as_str(), Some("ready"));
    assert_eq!(body["catalogue"].as_str(), Some("loaded"));
    assert_eq!(body["phrases"].as_u64(), Some(3));
}

#[tokio::test]
async fn it_should_serve_both_pages() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert!(response
        .header("content-type")
        .map(|ct| ct.starts_with("text/html"))
        .unwrap_or(false));

    let response = app.client.get("/app").await.unwrap();
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_stay_ready_on_an_empty_catalogue() {
    let app = TestApp::spawn_with(
        fixtures::CORRUPT_CATALOGUE,
        Ok(fixtures::MOCK_AUDIO.to_vec()),
    )
    .await;

    let response = app.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["catalogue"].as_str(), Some("empty"));
    assert_eq!(body["phrases"].as_u64(), Some(0));
}
