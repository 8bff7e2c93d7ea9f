pub mod client;
pub mod config;
pub mod config_manager;
pub mod controller;
pub mod error;
pub mod platform;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use controller::InteractionController;
