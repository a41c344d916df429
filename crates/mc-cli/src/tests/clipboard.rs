use crate::{
    Clipboard, ClipboardError, ClipboardResult, ClipboardWriter, MemoryNotifier, Variant,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};

use googletest::assert_that;
use googletest::prelude::{eq, len};

/// Counts writes and succeeds or fails as configured.
struct FakeWriter {
    succeed: bool,
    writes: Arc<AtomicUsize>,
}

impl FakeWriter {
    fn boxed(succeed: bool) -> (Box<dyn ClipboardWriter>, Arc<AtomicUsize>) {
        let writes = Arc::new(AtomicUsize::new(0));
        let writer = Self {
            succeed,
            writes: Arc::clone(&writes),
        };
        (Box::new(writer), writes)
    }
}

impl ClipboardWriter for FakeWriter {
    fn write_text(&self, _text: &str) -> ClipboardResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(())
        } else {
            Err(ClipboardError::unavailable("fake"))
        }
    }
}

#[tokio::test]
async fn given_primary_works_when_copy_then_fallback_unused_and_one_success_notice() {
    // Given
    let (primary, primary_writes) = FakeWriter::boxed(true);
    let (fallback, fallback_writes) = FakeWriter::boxed(true);
    let clipboard = Clipboard::new(primary, fallback);
    let notifier = MemoryNotifier::new();

    // When
    let result = clipboard.copy_text("1.2.3.4:25565", &notifier).await;

    // Then
    assert!(result.is_ok());
    assert_eq!(primary_writes.load(Ordering::SeqCst), 1);
    assert_eq!(fallback_writes.load(Ordering::SeqCst), 0);
    let notices = notifier.snapshot();
    assert_that!(notices, len(eq(1)));
    assert_eq!(notices[0].title, "Copied!");
}

#[tokio::test]
async fn given_primary_fails_when_copy_then_fallback_success_notifies_once() {
    // Given
    let (primary, _) = FakeWriter::boxed(false);
    let (fallback, fallback_writes) = FakeWriter::boxed(true);
    let clipboard = Clipboard::new(primary, fallback);
    let notifier = MemoryNotifier::new();

    // When
    let result = clipboard.copy_text("1.2.3.4:25565", &notifier).await;

    // Then
    assert!(result.is_ok());
    assert_eq!(fallback_writes.load(Ordering::SeqCst), 1);
    let notices = notifier.snapshot();
    assert_that!(notices, len(eq(1)));
    assert_that!(notices[0].variant, eq(Variant::Default));
}

#[tokio::test]
async fn given_both_fail_when_copy_then_error_and_manual_copy_notice() {
    // Given
    let (primary, _) = FakeWriter::boxed(false);
    let (fallback, _) = FakeWriter::boxed(false);
    let clipboard = Clipboard::new(primary, fallback);
    let notifier = MemoryNotifier::new();

    // When
    let result = clipboard.copy_text("1.2.3.4:25565", &notifier).await;

    // Then
    assert!(result.is_err());
    let notices = notifier.snapshot();
    assert_that!(notices, len(eq(1)));
    assert_that!(notices[0].variant, eq(Variant::Destructive));
    assert_eq!(
        notices[0].description,
        "Could not copy. Please copy it manually."
    );
}

/// Records which thread performed the write.
struct ThreadRecordingWriter {
    thread: Arc<Mutex<Option<ThreadId>>>,
}

impl ClipboardWriter for ThreadRecordingWriter {
    fn write_text(&self, _text: &str) -> ClipboardResult<()> {
        *self.thread.lock().unwrap() = Some(thread::current().id());
        Ok(())
    }
}

#[tokio::test]
async fn given_copy_when_written_then_writer_runs_off_the_async_thread() {
    // Given
    let recorded = Arc::new(Mutex::new(None));
    let (fallback, _) = FakeWriter::boxed(true);
    let clipboard = Clipboard::new(
        Box::new(ThreadRecordingWriter {
            thread: Arc::clone(&recorded),
        }),
        fallback,
    );
    let notifier = MemoryNotifier::new();

    // When
    let result = clipboard.copy_text("1.2.3.4:25565", &notifier).await;

    // Then
    assert!(result.is_ok());
    let writer_thread = (*recorded.lock().unwrap()).expect("writer was called");
    assert_ne!(writer_thread, thread::current().id());
}

#[test]
fn given_unavailable_system_clipboard_when_write_then_unavailable_error() {
    // Given
    let clipboard = crate::SystemClipboard::unavailable();

    // When
    let result = clipboard.write_text("x");

    // Then
    assert!(matches!(result, Err(ClipboardError::Unavailable { .. })));
}

#[cfg(unix)]
#[test]
fn given_scratch_clipboard_when_write_then_scratch_file_removed() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let clipboard = crate::ScratchFileClipboard::new(temp.path(), "cat", &[]);

    // When
    let result = clipboard.write_text("1.2.3.4:25565");

    // Then
    assert!(result.is_ok());
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn given_failing_copy_command_when_write_then_exit_status_error_and_no_leftovers() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let clipboard = crate::ScratchFileClipboard::new(temp.path(), "false", &[]);

    // When
    let result = clipboard.write_text("1.2.3.4:25565");

    // Then
    assert!(matches!(result, Err(ClipboardError::ExitStatus { .. })));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn given_tool_exits_without_reading_when_write_then_spawn_error_returned() {
    // Given
    let clipboard = crate::SystemClipboard::new("true", &[]);
    // Larger than any pipe buffer, so the write cannot complete.
    let text = "x".repeat(4 * 1024 * 1024);

    // When
    let result = clipboard.write_text(&text);

    // Then
    assert!(matches!(result, Err(ClipboardError::Spawn { .. })));
}
