pub mod api;
pub mod error;

pub use api::{ApiClient, TranslatedAudio, TranslatorApi, TRANSLATION_FAILED};
pub use error::ClientError;
