use std::sync::Arc;
use reqwest::Client;

use crate::config::Config;
use crate::translate::{TranslateFactory, TranslateInterface};
use crate::tts::{TTSFactory, TTSInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn TranslateInterface>,
    pub tts: Arc<dyn TTSInterface>,
}

impl AppState {
    /// Build the upstream engines described by `config`
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("kannada-translator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let translator = TranslateFactory::create_translator(&config.translate_config, client.clone())?;
        let tts = TTSFactory::create_tts(&config.tts_config, client)?;

        Ok(Self::with_engines(config, translator, tts))
    }

    pub fn with_engines(
        config: Config,
        translator: Arc<dyn TranslateInterface>,
        tts: Arc<dyn TTSInterface>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator,
            tts,
        }
    }
}
