use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::ui::{NoticeKind, UiSurface};

/// Transient success/error messages with auto-dismissal.
///
/// Every show or hide starts a new generation; a dismissal timer only hides
/// the notice of the generation that scheduled it.
pub struct NoticeBoard {
    ui: Arc<dyn UiSurface>,
    generation: Arc<AtomicU64>,
    success_after: Duration,
    error_after: Duration,
}

impl NoticeBoard {
    pub fn new(ui: Arc<dyn UiSurface>, success_after: Duration, error_after: Duration) -> Self {
        Self {
            ui,
            generation: Arc::new(AtomicU64::new(0)),
            success_after,
            error_after,
        }
    }

    pub fn show(&self, kind: NoticeKind, message: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.ui.hide_notices();
        self.ui.show_notice(kind, message);

        let delay = match kind {
            NoticeKind::Success => self.success_after,
            NoticeKind::Error => self.error_after,
        };

        let Ok(handle) = Handle::try_current() else {
            debug!("No async runtime; notice stays until replaced");
            return;
        };

        let ui = self.ui.clone();
        let current = self.generation.clone();
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                ui.hide_notices();
            }
        });
    }

    pub fn hide(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.ui.hide_notices();
    }
}
