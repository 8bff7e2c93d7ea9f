pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{TranslateAndAudioResponse, TranslateInterface, TranslateRequest, TranslateResponse};
pub use client::GoogleTranslateClient;
pub use factory::TranslateFactory;
