//! The UI surface the controller drives. Rendering belongs to the implementor.

pub mod terminal;

pub use terminal::{TerminalCommand, TerminalUi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Translate,
    Clear,
    Copy,
    SpeakSource,
    SpeakTarget,
    Download,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Translate,
        Action::Clear,
        Action::Copy,
        Action::SpeakSource,
        Action::SpeakTarget,
        Action::Download,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Widgets the controller toggles: input field, translation display,
/// action buttons, character counter, notices and the busy indicator.
pub trait UiSurface: Send + Sync {
    fn set_input(&self, text: &str);
    fn set_translation(&self, text: &str);
    fn set_char_count(&self, count: usize);
    fn set_action_enabled(&self, action: Action, enabled: bool);
    fn set_busy(&self, busy: bool);
    /// Show `message`; the controller hides earlier notices first
    fn show_notice(&self, kind: NoticeKind, message: &str);
    fn hide_notices(&self);
}
