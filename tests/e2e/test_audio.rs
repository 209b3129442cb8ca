use crate::helpers::{fixtures, TestApp};
use hyper::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_return_audio_bytes_with_mpeg_content_type() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_001/en").await.unwrap();
    response.assert_status(StatusCode::OK);
    response.assert_header("content-type", "audio/mpeg");
    assert_eq!(response.body_bytes, fixtures::MOCK_AUDIO);
}

#[tokio::test]
async fn it_should_synthesize_plain_text_for_native_languages() {
    let app = TestApp::spawn().await;

    app.client.get("/api/audio/phrase_001/en").await.unwrap();
    app.client.get("/api/audio/phrase_001/af").await.unwrap();

    assert_eq!(
        app.synthesis_calls(),
        vec![
            ("Hello".to_string(), "en".to_string()),
            ("Hallo".to_string(), "af".to_string()),
        ]
    );
}

#[tokio::test]
async fn it_should_synthesize_respelling_under_fallback_locale() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_001/zu").await.unwrap();
    response.assert_status(StatusCode::OK);
    response.assert_header("x-synthesis-language", "af");

    // isiZulu has no native voice: the tuned respelling goes out, voiced
    // under the Afrikaans locale
    assert_eq!(
        app.synthesis_calls(),
        vec![("sa-woo-BO-na".to_string(), "af".to_string())]
    );
}

#[tokio::test]
async fn it_should_synthesize_plain_text_when_respelling_is_absent() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_001/xh").await.unwrap();
    response.assert_status(StatusCode::OK);

    assert_eq!(
        app.synthesis_calls(),
        vec![("Molo".to_string(), "af".to_string())]
    );
}

#[tokio::test]
async fn it_should_return_404_for_unknown_phrase() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_999/en").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Phrase not found");
    assert!(app.synthesis_calls().is_empty());
}

#[tokio::test]
async fn it_should_return_404_for_unsupported_language() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_001/fr").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Unsupported language: fr");
    assert!(app.synthesis_calls().is_empty());
}

#[tokio::test]
async fn it_should_return_500_when_the_gateway_fails() {
    let app = TestApp::spawn_with_failing_gateway().await;

    let response = app.client.get("/api/audio/phrase_001/en").await.unwrap();
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("synthesis backend down");
}

#[tokio::test]
async fn it_should_expose_the_native_locale_in_the_header() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/audio/phrase_001/en").await.unwrap();
    response.assert_header("x-synthesis-language", "en");
}
