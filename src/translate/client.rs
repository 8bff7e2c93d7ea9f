use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config_manager::TranslateConfig;
use super::interface::TranslateInterface;

/// Translation client for the public Google translate endpoint (`client=gtx`)
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslateClient {
    /// Create a new translation client
    pub fn new(client: Client, config: &TranslateConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
        }
    }

    /// Join the translated segments of a `translate_a/single` reply.
    ///
    /// The reply is a nested array whose first element lists
    /// `[translated, original, ...]` pairs, one per sentence.
    pub fn parse_response(value: &Value) -> Result<String, anyhow::Error> {
        let segments = value
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow::anyhow!("Unexpected translation response shape"))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();

        if translated.trim().is_empty() {
            anyhow::bail!("Translation response contained no text");
        }
        Ok(translated)
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslateClient {
    async fn translate(&self, text: &str) -> Result<String, anyhow::Error> {
        debug!(
            "Sending translation request: {} -> {}, {} chars",
            self.source_lang,
            self.target_lang,
            text.chars().count()
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Translation upstream returned {}", status);
            anyhow::bail!("Translation upstream returned {}", status);
        }

        let value: Value = response.json().await?;
        Self::parse_response(&value)
    }

    fn target_lang(&self) -> &str {
        &self.target_lang
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
