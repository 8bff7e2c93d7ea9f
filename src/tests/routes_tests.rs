use super::*;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::config::Config;
use crate::translate::TranslateInterface;
use crate::tts::TTSInterface;
use crate::utils::audio_payload::decode_audio_data_url;

#[derive(Default)]
struct FakeTranslator {
    fail_with: Option<String>,
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl TranslateInterface for FakeTranslator {
    async fn translate(&self, text: &str) -> Result<String, anyhow::Error> {
        self.seen.lock().expect("lock").push(text.to_string());
        if let Some(err) = &self.fail_with {
            return Err(anyhow::anyhow!(err.clone()));
        }
        Ok("ಶುಭೋದಯ".to_string())
    }

    fn target_lang(&self) -> &str {
        "kn"
    }
}

#[derive(Default)]
struct FakeTts {
    seen: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl TTSInterface for FakeTts {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, anyhow::Error> {
        self.seen
            .lock()
            .expect("lock")
            .push((text.to_string(), language.to_string()));
        Ok(b"ID3fake".to_vec())
    }
}

fn app_with(translator: Arc<FakeTranslator>, tts: Arc<FakeTts>) -> Router {
    let state = AppState::with_engines(Config::default(), translator, tts);
    build_app(state)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn translate_returns_english_and_kannada() {
    let translator = Arc::new(FakeTranslator::default());
    let app = app_with(translator.clone(), Arc::new(FakeTts::default()));

    let response = app
        .oneshot(post_json("/translate", r#"{"text": "  Good morning  "}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["english"], "Good morning");
    assert_eq!(body["kannada"], "ಶುಭೋದಯ");
    assert_eq!(*translator.seen.lock().expect("lock"), vec!["Good morning"]);
}

#[tokio::test]
async fn blank_text_is_rejected_without_upstream_call() {
    let translator = Arc::new(FakeTranslator::default());
    let app = app_with(translator.clone(), Arc::new(FakeTts::default()));

    let response = app
        .oneshot(post_json("/translate", r#"{"text": "   "}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Text cannot be empty");
    assert!(translator.seen.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn upstream_failure_maps_to_500_with_message() {
    let translator = Arc::new(FakeTranslator {
        fail_with: Some("quota exceeded".to_string()),
        ..FakeTranslator::default()
    });
    let app = app_with(translator, Arc::new(FakeTts::default()));

    let response = app
        .oneshot(post_json("/translate", r#"{"text": "hello"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "quota exceeded");
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app_with(Arc::new(FakeTranslator::default()), Arc::new(FakeTts::default()));
    let response = app
        .oneshot(post_json("/translate", "{not json"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn audio_defaults_to_english_and_returns_mpeg() {
    let tts = Arc::new(FakeTts::default());
    let app = app_with(Arc::new(FakeTranslator::default()), tts.clone());

    let response = app
        .oneshot(post_json("/audio", r#"{"text": "hello"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).expect("content type"),
        "audio/mpeg"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("disposition")
        .to_str()
        .expect("ascii")
        .to_string();
    assert!(disposition.starts_with("inline; filename=\"audio_en_"));

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"ID3fake");
    assert_eq!(
        *tts.seen.lock().expect("lock"),
        vec![("hello".to_string(), "en".to_string())]
    );
}

#[tokio::test]
async fn audio_rejects_malformed_language_codes() {
    let tts = Arc::new(FakeTts::default());

    for body in [
        r#"{"text": "hello", "language": "kn\"; filename=x.exe"}"#,
        r#"{"text": "hello", "language": "kn&q=other"}"#,
        r#"{"text": "hello", "language": "k"}"#,
    ] {
        let app = app_with(Arc::new(FakeTranslator::default()), tts.clone());
        let response = app.oneshot(post_json("/audio", body)).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"]
            .as_str()
            .expect("error")
            .starts_with("Invalid language code"));
    }
    assert!(tts.seen.lock().expect("lock").is_empty());

    let app = app_with(Arc::new(FakeTranslator::default()), tts.clone());
    let response = app
        .oneshot(post_json("/audio", r#"{"text": "ಶುಭೋದಯ", "language": "kn-IN"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn translate_and_audio_speaks_the_translation() {
    let tts = Arc::new(FakeTts::default());
    let app = app_with(Arc::new(FakeTranslator::default()), tts.clone());

    let response = app
        .oneshot(post_json("/translate-and-audio", r#"{"text": "Good morning"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["kannada"], "ಶುಭೋದಯ");
    let audio = decode_audio_data_url(body["audio"].as_str().expect("audio")).expect("decode");
    assert_eq!(audio, b"ID3fake");
    assert_eq!(
        *tts.seen.lock().expect("lock"),
        vec![("ಶುಭೋದಯ".to_string(), "kn".to_string())]
    );
}

#[tokio::test]
async fn health_reports_target_language() {
    let app = app_with(Arc::new(FakeTranslator::default()), Arc::new(FakeTts::default()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["target_lang"], "kn");
}
