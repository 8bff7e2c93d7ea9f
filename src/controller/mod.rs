//! Interaction controller: turns user actions into requests against the
//! translation service and platform capabilities, and keeps the UI surface
//! in step with the session state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::client::{ClientError, TranslatorApi};
use crate::config_manager::ClientConfig;
use crate::platform::{Clipboard, FileSaver, SpeechSynthesis, Utterance};
use crate::ui::{Action, NoticeKind, UiSurface};
use crate::utils::audio_payload::audio_file_name;

pub mod error;
pub mod notice;
pub mod session;

pub use error::ControllerError;
pub use notice::NoticeBoard;
pub use session::{ActionAvailability, Operation, Session};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter English text";
pub const TRANSLATE_SUCCESS_MESSAGE: &str = "Translation successful!";
pub const COPY_SUCCESS_MESSAGE: &str = "Translation copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy";
pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "Audio downloaded successfully!";
const AUDIO_GENERATION_FAILED: &str = "Audio generation failed";

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "kn";

/// Speech locale for a language tag
pub fn speech_locale(language_tag: &str) -> &'static str {
    match language_tag {
        "kn" => "kn-IN",
        _ => "en-US",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub success_notice: Duration,
    pub error_notice: Duration,
    pub speech_rate: f32,
    pub speech_pitch: f32,
    pub speech_volume: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for ControllerSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            success_notice: config.success_notice_duration(),
            error_notice: config.error_notice_duration(),
            speech_rate: config.speech_rate,
            speech_pitch: config.speech_pitch,
            speech_volume: config.speech_volume,
        }
    }
}

/// External collaborators the controller composes
#[derive(Clone)]
pub struct Collaborators {
    pub api: Arc<dyn TranslatorApi>,
    pub speech: Arc<dyn SpeechSynthesis>,
    pub clipboard: Arc<dyn Clipboard>,
    pub files: Arc<dyn FileSaver>,
    pub ui: Arc<dyn UiSurface>,
}

pub struct InteractionController {
    api: Arc<dyn TranslatorApi>,
    speech: Arc<dyn SpeechSynthesis>,
    clipboard: Arc<dyn Clipboard>,
    files: Arc<dyn FileSaver>,
    ui: Arc<dyn UiSurface>,
    settings: ControllerSettings,
    session: Mutex<Session>,
    notices: NoticeBoard,
}

/// Clears an operation's busy state when dropped, on every exit path
struct OperationGuard<'a> {
    controller: &'a InteractionController,
    op: Operation,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.controller.end_operation(self.op);
    }
}

impl InteractionController {
    pub fn new(collaborators: Collaborators, settings: ControllerSettings) -> Self {
        let notices = NoticeBoard::new(
            collaborators.ui.clone(),
            settings.success_notice,
            settings.error_notice,
        );
        Self {
            api: collaborators.api,
            speech: collaborators.speech,
            clipboard: collaborators.clipboard,
            files: collaborators.files,
            ui: collaborators.ui,
            settings,
            session: Mutex::new(Session::default()),
            notices,
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render the initial state and report missing capabilities
    pub fn initialize(&self) {
        info!("Translator initialized");
        if !self.speech.is_available() {
            warn!("Speech synthesis not supported on this host");
        }

        let (input, count) = {
            let session = self.session();
            (session.input().to_string(), session.char_count())
        };
        self.ui.set_input(&input);
        self.ui.set_translation("");
        self.ui.set_char_count(count);
        self.ui.set_busy(false);
        self.render_actions();
    }

    pub fn current_translation(&self) -> Option<String> {
        self.session().current_translation().map(str::to_string)
    }

    pub fn input(&self) -> String {
        self.session().input().to_string()
    }

    pub fn char_count(&self) -> usize {
        self.session().char_count()
    }

    pub fn availability(&self) -> ActionAvailability {
        self.session().availability()
    }

    pub fn is_busy(&self, op: Operation) -> bool {
        self.session().is_busy(op)
    }

    fn render_actions(&self) {
        let availability = self.availability();
        for action in Action::ALL {
            self.ui.set_action_enabled(action, availability.is_enabled(action));
        }
    }

    fn begin_operation(&self, op: Operation) -> Result<OperationGuard<'_>, ControllerError> {
        if !self.session().try_begin(op) {
            debug!("Ignoring {} request while one is in flight", op);
            return Err(ControllerError::Busy(op));
        }
        if op.shows_busy_indicator() {
            self.ui.set_busy(true);
        }
        self.render_actions();
        Ok(OperationGuard {
            controller: self,
            op,
        })
    }

    fn end_operation(&self, op: Operation) {
        let still_busy = {
            let mut session = self.session();
            session.finish(op);
            session.shows_busy_indicator()
        };
        self.ui.set_busy(still_busy);
        self.render_actions();
    }

    /// Input field changed
    pub fn on_input(&self, text: &str) {
        let count = {
            let mut session = self.session();
            session.set_input(text);
            session.char_count()
        };
        self.ui.set_char_count(count);
    }

    /// Translate the current input (translate button, Ctrl+Enter)
    pub async fn submit(&self) -> Result<(), ControllerError> {
        let input = self.input();
        self.translate(&input).await
    }

    pub async fn translate(&self, input_text: &str) -> Result<(), ControllerError> {
        let text = input_text.trim();
        if text.is_empty() {
            self.notices.show(NoticeKind::Error, EMPTY_INPUT_MESSAGE);
            return Err(ControllerError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let _busy = self.begin_operation(Operation::Translate)?;
        self.notices.hide();
        let epoch = self.session().epoch();

        let kannada = match self.api.translate(text).await {
            Ok(kannada) => kannada,
            Err(ClientError::Rejected(message)) => {
                warn!("Translation rejected: {}", message);
                self.notices.show(NoticeKind::Error, &message);
                return Err(ControllerError::Transport(message));
            }
            Err(e) => {
                error!("Translation error: {}", e);
                let message = format!("Error: {}", e);
                self.notices.show(NoticeKind::Error, &message);
                return Err(ControllerError::Transport(message));
            }
        };

        if !self.session().accept_translation(epoch, &kannada) {
            debug!("Discarding translation that completed after the session was cleared");
            return Err(ControllerError::Superseded);
        }

        info!("Translated {} chars", text.chars().count());
        self.ui.set_translation(&kannada);
        self.render_actions();
        self.notices.show(NoticeKind::Success, TRANSLATE_SUCCESS_MESSAGE);
        Ok(())
    }

    /// Reset input, translation, counter and notices to the initial state
    pub fn clear(&self) {
        self.session().reset();
        self.ui.set_input("");
        self.ui.set_translation("");
        self.ui.set_char_count(0);
        self.render_actions();
        self.notices.hide();
    }

    /// Copy the current translation to the clipboard; no-op without one
    pub async fn copy(&self) -> Result<(), ControllerError> {
        let Some(text) = self.current_translation() else {
            return Ok(());
        };

        let _busy = self.begin_operation(Operation::Copy)?;
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                self.notices.show(NoticeKind::Success, COPY_SUCCESS_MESSAGE);
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.notices.show(NoticeKind::Error, COPY_FAILURE_MESSAGE);
                Err(ControllerError::Clipboard(e.to_string()))
            }
        }
    }

    /// Speak `text`, cutting off whatever is currently playing
    pub fn speak(&self, text: &str, language_tag: &str) -> Result<(), ControllerError> {
        if !self.speech.is_available() {
            warn!("Speech synthesis not supported");
            return Err(ControllerError::CapabilityUnavailable("speech synthesis"));
        }

        self.speech.cancel();
        self.speech.speak(Utterance {
            text: text.to_string(),
            lang: speech_locale(language_tag).to_string(),
            rate: self.settings.speech_rate,
            pitch: self.settings.speech_pitch,
            volume: self.settings.speech_volume,
        });
        Ok(())
    }

    /// Speak the English input
    pub fn speak_source(&self) -> Result<(), ControllerError> {
        let input = self.input();
        if input.trim().is_empty() {
            self.notices.show(NoticeKind::Error, EMPTY_INPUT_MESSAGE);
            return Err(ControllerError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
        }
        self.speak(&input, SOURCE_LANGUAGE)
    }

    /// Speak the Kannada translation; no-op without one
    pub fn speak_target(&self) -> Result<(), ControllerError> {
        match self.current_translation() {
            Some(text) => self.speak(&text, TARGET_LANGUAGE),
            None => Ok(()),
        }
    }

    /// Download Kannada audio for the current translation; no-op without one
    pub async fn download(&self) -> Result<Option<PathBuf>, ControllerError> {
        let Some(text) = self.current_translation() else {
            return Ok(None);
        };
        self.download_audio(&text, TARGET_LANGUAGE).await.map(Some)
    }

    /// Fetch synthesized audio and save it as `translation_<tag>_<unix millis>.mp3`
    pub async fn download_audio(
        &self,
        text: &str,
        language_tag: &str,
    ) -> Result<PathBuf, ControllerError> {
        let _busy = self.begin_operation(Operation::Download)?;

        let audio = match self.api.synthesize_audio(text, language_tag).await {
            Ok(audio) if !audio.is_empty() => audio,
            Ok(_) => return Err(self.download_failed(&ClientError::EmptyAudio)),
            Err(e) => return Err(self.download_failed(&e)),
        };

        let file_name = audio_file_name(
            "translation",
            language_tag,
            chrono::Utc::now().timestamp_millis(),
        );
        match self.files.save(&file_name, &audio).await {
            Ok(path) => {
                info!("Audio saved to {}", path.display());
                self.notices.show(NoticeKind::Success, DOWNLOAD_SUCCESS_MESSAGE);
                Ok(path)
            }
            Err(e) => {
                error!("Download error: {}", e);
                self.notices.show(
                    NoticeKind::Error,
                    &format!("Error downloading audio: {}", e),
                );
                Err(ControllerError::Save(e.to_string()))
            }
        }
    }

    fn download_failed(&self, err: &ClientError) -> ControllerError {
        error!("Download error: {}", err);
        let message = match err {
            ClientError::Status(_) | ClientError::EmptyAudio => AUDIO_GENERATION_FAILED.to_string(),
            other => other.to_string(),
        };
        self.notices.show(
            NoticeKind::Error,
            &format!("Error downloading audio: {}", message),
        );
        ControllerError::Transport(message)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
