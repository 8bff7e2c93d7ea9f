use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config_manager::ClientConfig;
use crate::translate::{TranslateAndAudioResponse, TranslateRequest, TranslateResponse};
use crate::tts::AudioRequest;
use crate::utils::audio_payload::decode_audio_data_url;
use super::error::ClientError;

pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Translation and audio endpoints as seen by the interaction controller
#[async_trait]
pub trait TranslatorApi: Send + Sync {
    /// `POST /translate`; returns the translated text
    async fn translate(&self, text: &str) -> Result<String, ClientError>;

    /// `POST /audio`; returns non-empty MP3 bytes
    async fn synthesize_audio(&self, text: &str, language: &str) -> Result<Vec<u8>, ClientError>;
}

/// Translation plus Kannada audio from `POST /translate-and-audio`
#[derive(Debug, Clone)]
pub struct TranslatedAudio {
    pub english: String,
    pub kannada: String,
    pub audio: Vec<u8>,
}

/// HTTP client for the translation service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.server_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn health_check(&self) -> Result<bool, ClientError> {
        let response = self.client.get(self.url("api/health")).send().await?;
        Ok(response.status().is_success())
    }

    pub async fn translate_and_audio(&self, text: &str) -> Result<TranslatedAudio, ClientError> {
        let response = self
            .client
            .post(self.url("translate-and-audio"))
            .json(&TranslateRequest { text: text.to_string() })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let reply: TranslateAndAudioResponse = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                ClientError::Malformed(e.to_string())
            } else {
                ClientError::Status(status)
            }
        })?;

        if !(reply.success && status.is_success()) {
            return Err(ClientError::Rejected(
                reply.error.unwrap_or_else(|| TRANSLATION_FAILED.to_string()),
            ));
        }

        match (reply.english, reply.kannada, reply.audio) {
            (Some(english), Some(kannada), Some(audio)) => {
                let audio = decode_audio_data_url(&audio)
                    .map_err(|e| ClientError::Malformed(e.to_string()))?;
                Ok(TranslatedAudio { english, kannada, audio })
            }
            _ => Err(ClientError::Malformed(
                "missing english, kannada or audio field".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TranslatorApi for ApiClient {
    async fn translate(&self, text: &str) -> Result<String, ClientError> {
        debug!("POST /translate ({} chars)", text.chars().count());
        let response = self
            .client
            .post(self.url("translate"))
            .json(&TranslateRequest { text: text.to_string() })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // Error replies still carry `{"error": ...}`, so the body is read whatever the status.
        let reply: TranslateResponse = match serde_json::from_slice(&body) {
            Ok(reply) => reply,
            Err(e) if status.is_success() => return Err(ClientError::Malformed(e.to_string())),
            Err(_) => return Err(ClientError::Status(status)),
        };

        if reply.success && status.is_success() {
            return reply
                .kannada
                .ok_or_else(|| ClientError::Malformed("missing translated text".to_string()));
        }

        warn!("Translation rejected with HTTP {}", status);
        Err(ClientError::Rejected(
            reply.error.unwrap_or_else(|| TRANSLATION_FAILED.to_string()),
        ))
    }

    async fn synthesize_audio(&self, text: &str, language: &str) -> Result<Vec<u8>, ClientError> {
        debug!("POST /audio (language={})", language);
        let response = self
            .client
            .post(self.url("audio"))
            .json(&AudioRequest {
                text: text.to_string(),
                language: Some(language.to_string()),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(ClientError::EmptyAudio);
        }
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
