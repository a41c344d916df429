use crate::{MemoryNotifier, Notification, Notifier, Variant};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, len};

#[test]
fn given_success_when_built_then_default_variant_without_duration() {
    // When
    let notice = Notification::success("Success!", "Server started");

    // Then
    assert_that!(notice.variant, eq(Variant::Default));
    assert!(notice.duration.is_none());
    assert_eq!(notice.title, "Success!");
    assert_eq!(notice.description, "Server started");
}

#[test]
fn given_failure_when_built_then_destructive_error_title() {
    // When
    let notice = Notification::failure("Could not perform the action");

    // Then
    assert_that!(notice.variant, eq(Variant::Destructive));
    assert_eq!(notice.title, "Error");
}

#[test]
fn given_duration_when_with_duration_then_duration_kept() {
    // When
    let notice =
        Notification::success("Server ready", "Connect").with_duration(Duration::from_secs(10));

    // Then
    assert_eq!(notice.duration, Some(Duration::from_secs(10)));
}

#[test]
fn given_memory_notifier_when_take_then_drained() {
    // Given
    let notifier = MemoryNotifier::new();
    notifier.notify(Notification::success("a", "b"));
    notifier.notify(Notification::destructive("c", "d"));

    // When
    let taken = notifier.take();

    // Then
    assert_that!(taken, len(eq(2)));
    assert!(notifier.snapshot().is_empty());
}
