use std::sync::Arc;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::config_manager::TranslateConfig;
use super::client::GoogleTranslateClient;
use super::interface::TranslateInterface;

/// Factory for creating translation engines
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create a translation engine based on configuration
    pub fn create_translator(
        config: &TranslateConfig,
        client: Client,
    ) -> Result<Arc<dyn TranslateInterface>> {
        info!(
            "Initializing translation engine: {} ({} -> {})",
            config.translate_model, config.source_lang, config.target_lang
        );

        match config.translate_model.as_str() {
            "google" | "google_translate" => Ok(Arc::new(GoogleTranslateClient::new(client, config))),
            other => anyhow::bail!("Unknown translation engine: {}", other),
        }
    }
}
