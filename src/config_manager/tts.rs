use serde::{Deserialize, Serialize};

/// Configuration for Text-to-Speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    #[serde(rename = "tts_model")]
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,

    /// Language used when an `/audio` request carries none
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Longest text the upstream accepts per request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_tts_model() -> String {
    "google_tts".to_string()
}

fn default_tts_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_chunk_chars() -> usize {
    100
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            tts_model: default_tts_model(),
            endpoint: default_tts_endpoint(),
            default_language: default_language(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}
