//! Ambient process-wide lifecycle hooks.
//!
//! Mirrors the hooks of [`Session`] against a lazily-initialized process-wide session, for
//! forwarding layers that need "always reachable" instrumentation without threading a
//! session through hundreds of mechanical wrappers. Every hook is gated by the
//! [tracing toggle](crate::tracing): while disabled, the hooks return immediately without
//! taking a lock, allocating or even initializing the registry.
//!
//! # Examples
//!
//! ```
//! use leak_tracker::{Identity, hooks, tracing};
//!
//! tracing::enable();
//!
//! let handle = Identity::from_addr(0x2000);
//! hooks::mark_for_leak_detection(handle)?;
//! hooks::destroy(handle)?;
//!
//! assert!(hooks::checkpoint().is_empty());
//! # tracing::disable();
//! # Ok::<(), leak_tracker::Error>(())
//! ```

use std::sync::OnceLock;

use crate::error::Result;
use crate::{Identity, Report, Session, tracing};

static GLOBAL: OnceLock<Session> = OnceLock::new();

fn global_session() -> &'static Session {
    GLOBAL.get_or_init(Session::new)
}

/// Starts tracking `identity` in the process-wide session.
///
/// Call after every successful acquire/create/copy call into the external library.
/// A no-op when tracing is disabled.
///
/// # Errors
///
/// Returns [`Error::DuplicateRegistration`](crate::Error::DuplicateRegistration) if
/// tracing is enabled and `identity` is already live.
#[track_caller]
pub fn mark_for_leak_detection(identity: Identity) -> Result<()> {
    if !tracing::is_enabled() {
        return Ok(());
    }

    global_session().mark_for_leak_detection(identity)
}

/// Records an external refcount increment against `identity` for attribution.
///
/// Best-effort; never fails. A no-op when tracing is disabled.
#[track_caller]
pub fn reference(identity: Identity) {
    if !tracing::is_enabled() {
        return;
    }

    global_session().reference(identity);
}

/// Stops tracking `identity` in the process-wide session.
///
/// Call on every release call into the external library, unconditionally, error paths
/// included. A no-op when tracing is disabled.
///
/// # Errors
///
/// Returns [`Error::UnknownRelease`](crate::Error::UnknownRelease) if tracing is enabled
/// and `identity` is not live.
#[track_caller]
pub fn destroy(identity: Identity) -> Result<()> {
    if !tracing::is_enabled() {
        return Ok(());
    }

    global_session().destroy(identity)
}

/// Checkpoints the process-wide session, reporting and draining all live identities.
///
/// Returns an empty report without initializing anything when tracing is disabled or no
/// hook has fired yet.
#[must_use = "the report is the only record of the drained tracking window"]
pub fn checkpoint() -> Report {
    if !tracing::is_enabled() {
        return Report::new();
    }

    GLOBAL.get().map_or_else(Report::new, Session::checkpoint)
}

/// Checkpoints the process-wide session and panics if anything leaked.
///
/// # Panics
///
/// Panics if tracing is enabled and one or more identities were still live.
#[track_caller]
pub fn assert_no_leaks() {
    let report = checkpoint();
    assert!(
        report.is_empty(),
        "outstanding leaks at checkpoint:\n{report}"
    );
}

/// The number of identities currently live in the process-wide session.
///
/// Zero when tracing never ran; does not initialize anything.
#[must_use]
pub fn tracked_count() -> usize {
    GLOBAL.get().map_or(0, Session::tracked_count)
}
