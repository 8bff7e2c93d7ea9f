use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use async_trait::async_trait;

use super::Clipboard;

/// A clipboard handle that can be opened and written from a blocking thread
pub trait ClipboardBackend: Send + 'static {
    fn set_text(&mut self, text: String) -> Result<(), arboard::Error>;
}

impl ClipboardBackend for arboard::Clipboard {
    fn set_text(&mut self, text: String) -> Result<(), arboard::Error> {
        arboard::Clipboard::set_text(self, text)
    }
}

type Opener<B> = dyn Fn() -> Result<B, arboard::Error> + Send + Sync;

/// Clipboard writes on the blocking pool.
///
/// The backend is opened on first use and kept, so on X11 the selection
/// stays owned after the write returns.
pub struct SystemClipboard<B: ClipboardBackend = arboard::Clipboard> {
    open: Arc<Opener<B>>,
    handle: Arc<Mutex<Option<B>>>,
}

impl SystemClipboard<arboard::Clipboard> {
    pub fn new() -> Self {
        Self::with_backend(arboard::Clipboard::new)
    }
}

impl Default for SystemClipboard<arboard::Clipboard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ClipboardBackend> SystemClipboard<B> {
    pub fn with_backend<F>(open: F) -> Self
    where
        F: Fn() -> Result<B, arboard::Error> + Send + Sync + 'static,
    {
        Self {
            open: Arc::new(open),
            handle: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl<B: ClipboardBackend> Clipboard for SystemClipboard<B> {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let open = self.open.clone();
        let handle = self.handle.clone();
        let text = text.to_string();

        tokio::task::spawn_blocking(move || -> Result<(), arboard::Error> {
            let mut slot = handle.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.is_none() {
                *slot = Some(open()?);
            }
            match slot.as_mut() {
                Some(backend) => backend.set_text(text),
                None => Err(arboard::Error::ClipboardNotSupported),
            }
        })
        .await
        .context("Clipboard task failed")?
        .context("Failed to write to the system clipboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingBackend {
        written: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardBackend for RecordingBackend {
        fn set_text(&mut self, text: String) -> Result<(), arboard::Error> {
            self.written.lock().expect("lock").push(text);
            Ok(())
        }
    }

    #[tokio::test]
    async fn writes_through_one_backend_handle() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let opened = Arc::new(AtomicUsize::new(0));
        let (written_clone, opened_clone) = (written.clone(), opened.clone());
        let clipboard = SystemClipboard::with_backend(move || {
            opened_clone.fetch_add(1, Ordering::SeqCst);
            Ok(RecordingBackend {
                written: written_clone.clone(),
            })
        });

        clipboard.write_text("ಶುಭೋದಯ").await.expect("copy");
        clipboard.write_text("ನಮಸ್ಕಾರ").await.expect("copy");

        assert_eq!(*written.lock().expect("lock"), vec!["ಶುಭೋದಯ", "ನಮಸ್ಕಾರ"]);
        assert_eq!(opened.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unavailable_clipboard_is_an_error() {
        let clipboard = SystemClipboard::<RecordingBackend>::with_backend(|| {
            Err(arboard::Error::ClipboardNotSupported)
        });
        assert!(clipboard.write_text("x").await.is_err());
    }
}
