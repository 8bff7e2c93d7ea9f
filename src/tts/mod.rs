pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{AudioRequest, TTSInterface};
pub use client::GoogleTTSClient;
pub use factory::TTSFactory;
