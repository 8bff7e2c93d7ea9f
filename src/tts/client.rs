use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config_manager::TTSConfig;
use crate::utils::sentence_divider::chunk_text;
use super::interface::TTSInterface;

/// TTS client for the Google translate speech endpoint.
///
/// The endpoint only accepts short texts, so input is split into chunks and
/// the returned MP3 frames are concatenated in order.
pub struct GoogleTTSClient {
    client: Client,
    endpoint: String,
    max_chunk_chars: usize,
}

impl GoogleTTSClient {
    /// Create a new TTS client
    pub fn new(client: Client, config: &TTSConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            max_chunk_chars: config.max_chunk_chars,
        }
    }

    async fn synthesize_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, anyhow::Error> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("TTS upstream returned {} for chunk {}/{}", status, idx, total);
            anyhow::bail!("TTS upstream returned {}", status);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl TTSInterface for GoogleTTSClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, anyhow::Error> {
        let chunks = chunk_text(text, self.max_chunk_chars);
        if chunks.is_empty() {
            anyhow::bail!("No text to speak");
        }

        debug!("Sending TTS request: language={}, chunks={}", language, chunks.len());

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let part = self.synthesize_chunk(chunk, language, idx, chunks.len()).await?;
            audio.extend_from_slice(&part);
        }

        if audio.is_empty() {
            anyhow::bail!("TTS upstream returned no audio");
        }
        debug!("TTS synthesis successful: {} bytes", audio.len());
        Ok(audio)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
