use std::collections::HashSet;
use std::fmt;

use crate::ui::Action;

/// Asynchronous controller operations; each may have one request in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Translate,
    Copy,
    Download,
}

impl Operation {
    /// Clipboard writes are quick and do not raise the busy indicator
    pub fn shows_busy_indicator(self) -> bool {
        !matches!(self, Operation::Copy)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Translate => "translation",
            Operation::Copy => "copy",
            Operation::Download => "audio download",
        };
        f.write_str(name)
    }
}

/// Per-page session state owned by one controller
#[derive(Debug, Default)]
pub struct Session {
    input: String,
    current_translation: Option<String>,
    /// Bumped by `reset`; translate results from an older epoch are stale
    epoch: u64,
    in_flight: HashSet<Operation>,
}

impl Session {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    /// Length shown by the character counter, in Unicode scalar values
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn current_translation(&self) -> Option<&str> {
        self.current_translation.as_deref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Store a translation requested during `epoch`. Returns false when stale.
    pub fn accept_translation(&mut self, epoch: u64, text: &str) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.current_translation = Some(text.to_string());
        true
    }

    /// Back to the initial state. In-flight bookkeeping survives so busy
    /// guards still release correctly.
    pub fn reset(&mut self) {
        self.input.clear();
        self.current_translation = None;
        self.epoch += 1;
    }

    pub fn try_begin(&mut self, op: Operation) -> bool {
        self.in_flight.insert(op)
    }

    pub fn finish(&mut self, op: Operation) {
        self.in_flight.remove(&op);
    }

    pub fn is_busy(&self, op: Operation) -> bool {
        self.in_flight.contains(&op)
    }

    pub fn shows_busy_indicator(&self) -> bool {
        self.in_flight.iter().any(|op| op.shows_busy_indicator())
    }

    pub fn availability(&self) -> ActionAvailability {
        ActionAvailability::derive(self)
    }
}

/// Which actions are enabled. Always computed from a `Session`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAvailability {
    pub translate: bool,
    pub clear: bool,
    pub copy: bool,
    pub speak_source: bool,
    pub speak_target: bool,
    pub download: bool,
}

impl ActionAvailability {
    pub fn derive(session: &Session) -> Self {
        let has_translation = session.current_translation.is_some();
        Self {
            translate: !session.is_busy(Operation::Translate),
            clear: true,
            copy: has_translation && !session.is_busy(Operation::Copy),
            speak_source: true,
            speak_target: has_translation,
            download: has_translation && !session.is_busy(Operation::Download),
        }
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Translate => self.translate,
            Action::Clear => self.clear,
            Action::Copy => self.copy,
            Action::SpeakSource => self.speak_source,
            Action::SpeakTarget => self.speak_target,
            Action::Download => self.download,
        }
    }
}
