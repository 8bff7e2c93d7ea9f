use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /audio`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioRequest {
    #[serde(default)]
    pub text: String,
    /// `en` for English, `kn` for Kannada; the service default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// TTS interface trait - synthesis happens in an upstream service
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize speech for `text` and return MP3 bytes
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `language` - Language code of the text, e.g. `kn`
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, anyhow::Error>;
}
