use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::{Action, NoticeKind, UiSurface};
use crate::controller::{ControllerError, InteractionController};

const HELP: &str = "\
Type English text and press Enter to translate it.
  /translate    translate the current input again
  /copy         copy the translation to the clipboard
  /speak-en     speak the English input
  /speak-kn     speak the Kannada translation
  /download     save the Kannada audio as MP3
  /clear        reset everything
  /status       show input length and enabled actions
  /quit         exit";

/// One line typed at the terminal prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Replace the input with this text and translate it
    Input(String),
    Translate,
    Copy,
    SpeakSource,
    SpeakTarget,
    Download,
    Clear,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl TerminalCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !trimmed.starts_with('/') {
            return Some(TerminalCommand::Input(line.trim_end_matches(['\r', '\n']).to_string()));
        }

        let command = match trimmed {
            "/translate" | "/t" => TerminalCommand::Translate,
            "/copy" | "/c" => TerminalCommand::Copy,
            "/speak-en" => TerminalCommand::SpeakSource,
            "/speak-kn" | "/speak" => TerminalCommand::SpeakTarget,
            "/download" | "/d" => TerminalCommand::Download,
            "/clear" => TerminalCommand::Clear,
            "/status" => TerminalCommand::Status,
            "/help" | "/?" => TerminalCommand::Help,
            "/quit" | "/exit" | "/q" => TerminalCommand::Quit,
            other => TerminalCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

#[derive(Debug, Default)]
struct TerminalView {
    busy: bool,
    enabled: HashMap<Action, bool>,
}

/// Line-oriented UI surface writing to stdout
#[derive(Default)]
pub struct TerminalUi {
    view: Mutex<TerminalView>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn view(&self) -> std::sync::MutexGuard<'_, TerminalView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        self.view().enabled.get(&action).copied().unwrap_or(false)
    }
}

impl UiSurface for TerminalUi {
    fn set_input(&self, _text: &str) {}

    fn set_translation(&self, text: &str) {
        if !text.is_empty() {
            println!("ಕನ್ನಡ: {}", text);
        }
    }

    fn set_char_count(&self, count: usize) {
        debug!("input length {}", count);
    }

    fn set_action_enabled(&self, action: Action, enabled: bool) {
        self.view().enabled.insert(action, enabled);
    }

    fn set_busy(&self, busy: bool) {
        let mut view = self.view();
        if busy && !view.busy {
            println!("…");
        }
        view.busy = busy;
    }

    fn show_notice(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("✓ {}", message),
            NoticeKind::Error => eprintln!("✗ {}", message),
        }
    }

    // Printed notices stay in the scrollback.
    fn hide_notices(&self) {}
}

/// Read commands from stdin until `/quit` or end of input.
///
/// Network-bound actions run as their own tasks so a download can proceed
/// while a new translation is requested.
pub async fn run(controller: Arc<InteractionController>, ui: Arc<TerminalUi>) -> anyhow::Result<()> {
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = TerminalCommand::parse(&line) else {
            continue;
        };

        match command {
            TerminalCommand::Input(text) => {
                controller.on_input(&text);
                spawn_action(&controller, |c| async move { c.submit().await });
            }
            TerminalCommand::Translate => {
                spawn_action(&controller, |c| async move { c.submit().await })
            }
            TerminalCommand::Copy => spawn_action(&controller, |c| async move { c.copy().await }),
            TerminalCommand::Download => {
                spawn_action(&controller, |c| async move { c.download().await })
            }
            TerminalCommand::SpeakSource => report(&controller.speak_source()),
            TerminalCommand::SpeakTarget => report(&controller.speak_target()),
            TerminalCommand::Clear => controller.clear(),
            TerminalCommand::Status => {
                let enabled: Vec<String> = Action::ALL
                    .iter()
                    .filter(|action| ui.is_enabled(**action))
                    .map(|action| format!("{:?}", action))
                    .collect();
                println!(
                    "{} characters; enabled: {}",
                    controller.char_count(),
                    enabled.join(", ")
                );
            }
            TerminalCommand::Help => println!("{}", HELP),
            TerminalCommand::Quit => break,
            TerminalCommand::Unknown(other) => eprintln!("Unknown command {} (try /help)", other),
        }
    }

    Ok(())
}

/// Line to print for an outcome the controller does not surface as a notice
pub fn outcome_message<T>(result: &Result<T, ControllerError>) -> Option<String> {
    match result {
        Err(err @ ControllerError::Busy(_)) => Some(err.to_string()),
        _ => None,
    }
}

fn report<T>(result: &Result<T, ControllerError>) {
    if let Some(line) = outcome_message(result) {
        eprintln!("{}", line);
    }
}

fn spawn_action<F, Fut, T>(controller: &Arc<InteractionController>, action: F)
where
    F: FnOnce(Arc<InteractionController>) -> Fut,
    Fut: Future<Output = Result<T, ControllerError>> + Send + 'static,
    T: Send + 'static,
{
    let pending = action(controller.clone());
    tokio::spawn(async move { report(&pending.await) });
}
