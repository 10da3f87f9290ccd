//! Integration tests for the ambient process-wide hooks with tracing enabled.
//!
//! The ambient hooks share one process-wide registry and the tracing toggle is process
//! global, so every test here serializes on a lock and drains the registry before and
//! after itself. The disabled-toggle behavior lives in `disabled_tracing_tests.rs`,
//! which runs as its own process.

use std::sync::Mutex;

use leak_tracker::{EntryKind, Error, Identity, hooks, tracing};

// Tests in one binary run in parallel threads; the global session must not be shared
// between them mid-test.
static GLOBAL_SESSION_LOCK: Mutex<()> = Mutex::new(());

fn with_enabled_tracing(f: impl FnOnce()) {
    let _guard = GLOBAL_SESSION_LOCK.lock().unwrap();

    tracing::enable();
    drop(hooks::checkpoint()); // Start from a clean window.

    f();

    drop(hooks::checkpoint());
    tracing::disable();
}

#[test]
fn ambient_lifecycle_round_trip() {
    with_enabled_tracing(|| {
        let identity = Identity::from_addr(0x1000);

        hooks::mark_for_leak_detection(identity).unwrap();
        assert_eq!(hooks::tracked_count(), 1);

        hooks::reference(identity);
        hooks::destroy(identity).unwrap();

        assert_eq!(hooks::tracked_count(), 0);
        hooks::assert_no_leaks();
    });
}

#[test]
fn ambient_leak_is_reported_and_drained() {
    with_enabled_tracing(|| {
        let identity = Identity::from_addr(0x2000);

        hooks::mark_for_leak_detection(identity).unwrap();

        let report = hooks::checkpoint();
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].kind(), EntryKind::Leaked);
        assert_eq!(report.entries()[0].identity(), identity);

        assert!(hooks::checkpoint().is_empty());
    });
}

#[test]
fn ambient_double_destroy_is_unknown_release() {
    with_enabled_tracing(|| {
        let identity = Identity::from_addr(0x3000);

        hooks::mark_for_leak_detection(identity).unwrap();
        hooks::destroy(identity).unwrap();

        let error = hooks::destroy(identity).unwrap_err();
        assert!(matches!(error, Error::UnknownRelease { .. }));
    });
}

#[test]
fn ambient_hooks_attribute_to_the_wrapping_call() {
    with_enabled_tracing(|| {
        hooks::mark_for_leak_detection(Identity::from_addr(0x4000)).unwrap();

        let report = hooks::checkpoint();
        assert!(report.entries()[0].call_site().to_string().contains(file!()));
    });
}

#[test]
fn disabling_mid_window_keeps_tracked_state() {
    with_enabled_tracing(|| {
        let identity = Identity::from_addr(0x5000);
        hooks::mark_for_leak_detection(identity).unwrap();

        // Toggling off pauses observation but does not discard the window.
        tracing::disable();
        assert_eq!(hooks::tracked_count(), 1);
        assert!(hooks::checkpoint().is_empty());

        tracing::enable();
        hooks::destroy(identity).unwrap();
        hooks::assert_no_leaks();
    });
}
