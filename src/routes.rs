use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use regex::Regex;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslateAndAudioResponse, TranslateRequest, TranslateResponse};
use crate::tts::AudioRequest;
use crate::utils::audio_payload::{audio_data_url, audio_file_name, AUDIO_MIME};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system_config.static_path();

    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Translation API
        .route("/translate", post(translate))
        .route("/audio", post(generate_audio))
        .route("/translate-and-audio", post(translate_and_audio))

        // Browser front end
        .fallback_service(ServeDir::new(static_dir))
}

/// Full application with tracing and CORS layers
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "target_lang": state.translator.target_lang(),
    }))
}

fn required_text(raw: &str) -> Result<String, ApiError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ApiError::EmptyText);
    }
    Ok(text.to_string())
}

/// Language tags end up in the upstream query and the response file name
fn language_tag(raw: Option<String>, default: &str) -> Result<String, ApiError> {
    let language = match raw.filter(|l| !l.trim().is_empty()) {
        Some(language) => language.trim().to_string(),
        None => return Ok(default.to_string()),
    };

    let pattern = Regex::new(r"^[A-Za-z-]{2,8}$").map_err(anyhow::Error::from)?;
    if !pattern.is_match(&language) {
        return Err(ApiError::BadRequest(format!("Invalid language code: {}", language)));
    }
    Ok(language)
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = parse_body(payload)?;
    let english = required_text(&request.text)?;

    let kannada = state.translator.translate(&english).await?;
    debug!("Translated {} chars", english.chars().count());

    Ok(Json(TranslateResponse {
        success: true,
        english: Some(english),
        kannada: Some(kannada),
        error: None,
    }))
}

async fn generate_audio(
    State(state): State<AppState>,
    payload: Result<Json<AudioRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = parse_body(payload)?;
    let text = required_text(&request.text)?;
    let language = language_tag(request.language, &state.config.tts_config.default_language)?;

    let audio = state.tts.synthesize(&text, &language).await?;
    let file_name = audio_file_name("audio", &language, chrono::Utc::now().timestamp_millis());
    info!("Generated {} bytes of {} audio", audio.len(), language);

    Ok((
        [
            (header::CONTENT_TYPE, AUDIO_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file_name),
            ),
        ],
        audio,
    )
        .into_response())
}

async fn translate_and_audio(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateAndAudioResponse>, ApiError> {
    let request = parse_body(payload)?;
    let english = required_text(&request.text)?;

    let kannada = state.translator.translate(&english).await?;
    let audio = state
        .tts
        .synthesize(&kannada, state.translator.target_lang())
        .await?;

    Ok(Json(TranslateAndAudioResponse {
        success: true,
        english: Some(english),
        kannada: Some(kannada),
        audio: Some(audio_data_url(&audio)),
        error: None,
    }))
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
