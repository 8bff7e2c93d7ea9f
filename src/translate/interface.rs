use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /translate` and `POST /translate-and-audio`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

/// Reply of `POST /translate`. Failures carry only `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reply of `POST /translate-and-audio`; `audio` is a `data:audio/mpeg;base64,` URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateAndAudioResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Upstream translation engine used by the service
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` from the configured source language to the target language
    async fn translate(&self, text: &str) -> Result<String, anyhow::Error>;

    /// Language code the engine translates into, e.g. `kn`
    fn target_lang(&self) -> &str;
}
