use serde::{Deserialize, Serialize};

/// Configuration for the upstream translation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Engine name understood by `TranslateFactory` (currently `google`)
    #[serde(rename = "translate_model")]
    #[serde(default = "default_translate_model")]
    pub translate_model: String,

    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default = "default_translate_endpoint")]
    pub endpoint: String,
}

fn default_translate_model() -> String {
    "google".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "kn".to_string()
}

fn default_translate_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            translate_model: default_translate_model(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            endpoint: default_translate_endpoint(),
        }
    }
}
