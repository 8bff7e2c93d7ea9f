use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the interactive front end that drives the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(rename = "success_notice_ms")]
    #[serde(default = "default_success_notice_ms")]
    pub success_notice_ms: u64,

    #[serde(rename = "error_notice_ms")]
    #[serde(default = "default_error_notice_ms")]
    pub error_notice_ms: u64,

    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,

    #[serde(default = "default_unit")]
    pub speech_pitch: f32,

    #[serde(default = "default_unit")]
    pub speech_volume: f32,

    /// Program used for speech output, e.g. `espeak-ng`
    #[serde(default = "default_speech_command")]
    pub speech_command: String,

    #[serde(default = "default_download_dir")]
    pub download_dir: String,

    /// No timeout when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_success_notice_ms() -> u64 {
    3000
}

fn default_error_notice_ms() -> u64 {
    4000
}

fn default_speech_rate() -> f32 {
    0.9
}

fn default_unit() -> f32 {
    1.0
}

fn default_speech_command() -> String {
    "espeak-ng".to_string()
}

fn default_download_dir() -> String {
    "downloads".to_string()
}

impl ClientConfig {
    pub fn success_notice_duration(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }

    pub fn error_notice_duration(&self) -> Duration {
        Duration::from_millis(self.error_notice_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn download_path(&self) -> PathBuf {
        PathBuf::from(&self.download_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            success_notice_ms: default_success_notice_ms(),
            error_notice_ms: default_error_notice_ms(),
            speech_rate: default_speech_rate(),
            speech_pitch: default_unit(),
            speech_volume: default_unit(),
            speech_command: default_speech_command(),
            download_dir: default_download_dir(),
            request_timeout_secs: None,
        }
    }
}
