use crate::helpers::{fixtures, TestApp};
use hyper::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_list_categories_in_stored_order() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/categories").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));

    let ids: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["greeting", "emergency"]);
}

#[tokio::test]
async fn it_should_list_all_phrases_with_consistent_total() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrases").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let phrases = body["phrases"].as_array().unwrap();
    assert_eq!(body["total"].as_u64().unwrap() as usize, phrases.len());
    assert_eq!(phrases.len(), 3);
}

#[tokio::test]
async fn it_should_filter_phrases_by_category_preserving_order() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrases/category/greeting").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["category"].as_str(), Some("greeting"));

    let ids: Vec<&str> = body["phrases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["phrase_001", "phrase_003"]);
    assert_eq!(body["total"].as_u64(), Some(2));
}

#[tokio::test]
async fn it_should_return_empty_list_for_unknown_category() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrases/category/farewell").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body["total"].as_u64(), Some(0));
    assert!(body["phrases"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn it_should_get_phrase_by_id_with_full_translations() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrase/phrase_001").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let phrase = &body["phrase"];
    assert_eq!(phrase["id"].as_str(), Some("phrase_001"));
    assert_eq!(phrase["translations"]["en"]["text"].as_str(), Some("Hello"));
    assert_eq!(
        phrase["translations"]["zu"]["tts_pronunciation"].as_str(),
        Some("sa-woo-BO-na")
    );
    // Absent respellings are omitted, not serialized as null
    assert!(phrase["translations"]["xh"]
        .as_object()
        .unwrap()
        .get("tts_pronunciation")
        .is_none());
}

#[tokio::test]
async fn it_should_return_404_for_unknown_phrase() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrase/phrase_999").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Phrase not found");
}

#[tokio::test]
async fn it_should_serve_empty_results_from_a_corrupt_document() {
    let app = TestApp::spawn_with(
        fixtures::CORRUPT_CATALOGUE,
        Ok(fixtures::MOCK_AUDIO.to_vec()),
    )
    .await;

    let response = app.client.get("/api/categories").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert!(response.body.as_ref().unwrap()["categories"]
        .as_array()
        .unwrap()
        .is_empty());

    let response = app.client.get("/api/phrases").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["total"].as_u64(), Some(0));

    // Lookups against the empty catalogue are not-found, not server errors
    let response = app.client.get("/api/phrase/phrase_001").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_include_request_id_in_responses() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/phrases").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_handle_concurrent_catalogue_reads() {
    let app = TestApp::spawn().await;

    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = app.client.clone();
        futures.push(async move { client.get("/api/phrases").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
        assert_eq!(response.body.as_ref().unwrap()["total"].as_u64(), Some(3));
    }
}
