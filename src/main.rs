use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kannada_translator::client::{ApiClient, TranslatorApi};
use kannada_translator::config::Config;
use kannada_translator::controller::{Collaborators, ControllerSettings, InteractionController};
use kannada_translator::platform::{
    clipboard::SystemClipboard, files::DirectoryFileSaver, speech::CommandSpeech,
};
use kannada_translator::routes::build_app;
use kannada_translator::state::AppState;
use kannada_translator::ui::{self, terminal::TerminalUi};

#[derive(Parser)]
#[command(name = "kannada-translator", version, about = "English to Kannada translator")]
struct Cli {
    /// Configuration file (.jsonld, .json or .yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the translation service and serve the browser front end
    Serve,
    /// Interactive terminal front end talking to a running service
    Client {
        #[arg(long)]
        server_url: Option<String>,
    },
    /// Translate once and print the Kannada text
    Translate {
        text: String,
        /// Also write the Kannada audio to this file
        #[arg(long)]
        audio: Option<PathBuf>,
        #[arg(long)]
        server_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the terminal front end owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kannada_translator=debug,tower_http=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (mut config, loaded_path) = Config::discover(cli.config.as_deref())?;
    match &loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Client { server_url } => {
            if let Some(url) = server_url {
                config.client_config.server_url = url;
            }
            run_client(config).await
        }
        Command::Translate {
            text,
            audio,
            server_url,
        } => {
            if let Some(url) = server_url {
                config.client_config.server_url = url;
            }
            translate_once(config, &text, audio).await
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let static_dir = config.system_config.static_path();
    if !static_dir.is_dir() {
        warn!("Static directory {} does not exist", static_dir.display());
    }

    let addr = config.system_config.bind_addr().await?;
    let app_state = AppState::new(config)?;
    let app = build_app(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_client(config: Config) -> Result<()> {
    let client_config = &config.client_config;
    let api = ApiClient::from_config(client_config)?;

    match api.health_check().await {
        Ok(true) => info!("Connected to {}", client_config.server_url),
        Ok(false) | Err(_) => warn!(
            "Translation service at {} is not responding",
            client_config.server_url
        ),
    }

    let terminal_ui = Arc::new(TerminalUi::new());
    let controller = Arc::new(InteractionController::new(
        Collaborators {
            api: Arc::new(api),
            speech: Arc::new(CommandSpeech::new(&client_config.speech_command)),
            clipboard: Arc::new(SystemClipboard::new()),
            files: Arc::new(DirectoryFileSaver::new(client_config.download_path())),
            ui: terminal_ui.clone(),
        },
        ControllerSettings::from(client_config),
    ));
    controller.initialize();

    ui::terminal::run(controller, terminal_ui).await
}

async fn translate_once(config: Config, text: &str, audio: Option<PathBuf>) -> Result<()> {
    let api = ApiClient::from_config(&config.client_config)?;

    match audio {
        Some(path) => {
            let result = api.translate_and_audio(text).await?;
            tokio::fs::write(&path, &result.audio)
                .await
                .with_context(|| format!("Failed to write audio to {}", path.display()))?;
            info!("Wrote {} bytes of audio to {}", result.audio.len(), path.display());
            println!("{}", result.kannada);
        }
        None => {
            println!("{}", api.translate(text).await?);
        }
    }

    Ok(())
}
