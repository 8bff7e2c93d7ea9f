pub mod client;
pub mod system;
pub mod translate;
pub mod tts;
pub mod utils;

pub use client::ClientConfig;
pub use system::SystemConfig;
pub use translate::TranslateConfig;
pub use tts::TTSConfig;
