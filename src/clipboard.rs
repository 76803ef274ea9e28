//! Pasteboard access for the copy-text action on feed cards.

use parking_lot::Mutex;

/// Abstraction over the system pasteboard so reducers stay testable.
pub trait Pasteboard: Send + Sync {
    /// Write text to the pasteboard. Failures are logged, not surfaced;
    /// the confirmation toast is shown regardless.
    fn write(&self, text: &str);
}

/// System pasteboard backed by `arboard`.
///
/// The underlying handle is created lazily on first write because some
/// environments (headless CI) have no clipboard at all.
pub struct SystemPasteboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemPasteboard {
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(None),
        }
    }
}

impl Default for SystemPasteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Pasteboard for SystemPasteboard {
    fn write(&self, text: &str) {
        let mut guard = self.clipboard.lock();
        if guard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => *guard = Some(clipboard),
                Err(err) => {
                    tracing::warn!("Clipboard unavailable: {}", err);
                    return;
                }
            }
        }
        if let Some(clipboard) = guard.as_mut() {
            if let Err(err) = clipboard.set_text(text.to_string()) {
                tracing::warn!("Failed to set clipboard text: {}", err);
            }
        }
    }
}
