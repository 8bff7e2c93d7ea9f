//! Host capabilities the controller drives: speech output, clipboard and file saving.

use std::path::PathBuf;

use async_trait::async_trait;

pub mod clipboard;
pub mod files;
pub mod speech;

pub use clipboard::SystemClipboard;
pub use files::DirectoryFileSaver;
pub use speech::CommandSpeech;

/// One unit of synthesized speech output
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// BCP 47 locale, e.g. `kn-IN`
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Platform speech synthesis. Playback is fire-and-forget.
pub trait SpeechSynthesis: Send + Sync {
    fn is_available(&self) -> bool;

    /// Start speaking; completion is never reported back
    fn speak(&self, utterance: Utterance);

    /// Stop any utterance that is currently playing
    fn cancel(&self);
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Client-side file save, the terminal counterpart of a browser download
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// Store `bytes` under `file_name` and return where they landed
    async fn save(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf>;
}
