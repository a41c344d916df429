//! Copying text to the system clipboard with a fallback path.

mod error;
mod scratch;
mod system;

pub use error::{ClipboardError, Result as ClipboardResult};
pub use scratch::ScratchFileClipboard;
pub use system::SystemClipboard;

use crate::notify::{Notification, Notifier};

use std::sync::Arc;

use log::warn;

/// Anything that can put text on a clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Primary clipboard write with a fallback when the primary is unavailable or fails.
pub struct Clipboard {
    primary: Arc<dyn ClipboardWriter>,
    fallback: Arc<dyn ClipboardWriter>,
}

impl Clipboard {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Box<dyn ClipboardWriter>) -> Self {
        Self {
            primary: Arc::from(primary),
            fallback: Arc::from(fallback),
        }
    }

    /// Platform clipboard tool first, scratch-file copy command second.
    pub fn platform_default() -> Self {
        Self::new(
            Box::new(SystemClipboard::detect()),
            Box::new(ScratchFileClipboard::platform_default()),
        )
    }

    /// Copy `value`, emitting exactly one notification for the outcome.
    ///
    /// Writers spawn and wait on external processes, so they run on the
    /// blocking pool instead of an async worker.
    pub async fn copy_text(&self, value: &str, notifier: &dyn Notifier) -> ClipboardResult<()> {
        let primary = Arc::clone(&self.primary);
        let fallback = Arc::clone(&self.fallback);
        let text = value.to_string();

        let result = tokio::task::spawn_blocking(move || {
            write_with_fallback(primary.as_ref(), fallback.as_ref(), &text)
        })
        .await
        .map_err(ClipboardError::blocking_task)
        .and_then(|result| result);

        match &result {
            Ok(()) => notifier.notify(Notification::success(
                "Copied!",
                "Address copied to the clipboard",
            )),
            Err(e) => {
                warn!("Fallback clipboard failed: {e}");
                notifier.notify(Notification::failure(
                    "Could not copy. Please copy it manually.",
                ));
            }
        }

        result
    }
}

fn write_with_fallback(
    primary: &dyn ClipboardWriter,
    fallback: &dyn ClipboardWriter,
    text: &str,
) -> ClipboardResult<()> {
    primary.write_text(text).or_else(|primary_err| {
        warn!("Primary clipboard failed, trying fallback: {primary_err}");
        fallback.write_text(text)
    })
}
