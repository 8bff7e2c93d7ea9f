use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use super::{SpeechSynthesis, Utterance};

const ESPEAK_DEFAULT_WPM: f32 = 175.0;
const ESPEAK_DEFAULT_PITCH: f32 = 50.0;
const ESPEAK_DEFAULT_AMPLITUDE: f32 = 100.0;

/// Speech through an espeak-compatible command line synthesizer.
///
/// At most one child process plays at a time; `cancel` kills it.
pub struct CommandSpeech {
    program: Option<PathBuf>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(program: &str) -> Self {
        let resolved = which::which(program).ok();
        if resolved.is_none() {
            debug!("Speech program {} not found or not executable", program);
        }
        Self {
            program: resolved,
            current: Mutex::new(None),
        }
    }

    /// espeak voice name for a locale: `kn-IN` -> `kn`, `en-US` -> `en-us`
    pub fn voice_for(lang: &str) -> String {
        let lower = lang.to_ascii_lowercase();
        match lower.split('-').next() {
            Some("en") => lower,
            Some(primary) => primary.to_string(),
            None => lower,
        }
    }

    /// Command line arguments for one utterance, scaled from web speech units
    pub fn args_for(utterance: &Utterance) -> Vec<String> {
        vec![
            "-v".to_string(),
            Self::voice_for(&utterance.lang),
            "-s".to_string(),
            ((ESPEAK_DEFAULT_WPM * utterance.rate) as u32).to_string(),
            "-p".to_string(),
            ((ESPEAK_DEFAULT_PITCH * utterance.pitch).round().min(99.0) as u32).to_string(),
            "-a".to_string(),
            ((ESPEAK_DEFAULT_AMPLITUDE * utterance.volume).round().min(200.0) as u32).to_string(),
            "--".to_string(),
            utterance.text.clone(),
        ]
    }
}

impl SpeechSynthesis for CommandSpeech {
    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    fn speak(&self, utterance: Utterance) {
        let Some(program) = &self.program else {
            warn!("Speech synthesis not supported");
            return;
        };

        let spawned = Command::new(program)
            .args(Self::args_for(&utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                debug!("Speaking {} chars as {}", utterance.text.chars().count(), utterance.lang);
                let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
                if let Some(mut previous) = current.replace(child) {
                    let _ = previous.start_kill();
                }
            }
            Err(e) => warn!("Failed to start speech program: {}", e),
        }
    }

    fn cancel(&self) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut child) = current.take() {
            // Already exited children report an error here, which is fine.
            let _ = child.start_kill();
        }
    }
}
