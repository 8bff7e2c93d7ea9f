use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config_manager::TTSConfig;
use super::client::GoogleTTSClient;
use super::interface::TTSInterface;

/// Factory for creating TTS engines/clients
pub struct TTSFactory;

impl TTSFactory {
    /// Create a TTS client based on configuration
    ///
    /// # Arguments
    /// * `tts_config` - TTS configuration from config manager
    /// * `client` - shared HTTP client for upstream requests
    pub fn create_tts(tts_config: &TTSConfig, client: Client) -> Result<Arc<dyn TTSInterface>> {
        info!("Initializing TTS engine: {}", tts_config.tts_model);

        if tts_config.max_chunk_chars == 0 {
            anyhow::bail!("tts_config.max_chunk_chars must be positive");
        }

        match tts_config.tts_model.as_str() {
            "google_tts" | "gtts" => Ok(Arc::new(GoogleTTSClient::new(client, tts_config))),
            other => anyhow::bail!("Unknown TTS engine: {}", other),
        }
    }
}
