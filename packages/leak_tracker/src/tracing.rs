//! The switch gating whether any ambient instrumentation runs at all.
//!
//! When tracing is disabled (the default), every hook in [`crate::hooks`] returns
//! immediately: no lock is taken, nothing is allocated and the process-wide registry is
//! not even initialized. None of the tracking error conditions can be observed while
//! disabled, by construction.
//!
//! Explicitly constructed [`Session`](crate::Session) instances are not gated: creating
//! one is itself the opt-in.
//!
//! # Examples
//!
//! ```
//! use leak_tracker::tracing;
//!
//! assert!(!tracing::is_enabled());
//! tracing::enable();
//! assert!(tracing::is_enabled());
//! tracing::disable();
//! ```

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// The environment variable consulted by [`init_from_env`].
pub const ENV_VAR: &str = "LEAK_TRACKER_TRACING";

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables the ambient lifecycle hooks.
pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disables the ambient lifecycle hooks.
///
/// Already-tracked state is kept, not discarded; re-enabling resumes the same window.
pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Whether the ambient lifecycle hooks are currently active.
///
/// A single relaxed atomic load; cheap enough for every hook to call first.
#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Enables tracing if the `LEAK_TRACKER_TRACING` environment variable says so.
///
/// Accepts `1` or `true` (case-insensitive). Anything else, including an unset variable,
/// leaves the toggle untouched, so a harness can still enable tracing programmatically.
/// Call once at process or harness start.
pub fn init_from_env() {
    if let Ok(value) = env::var(ENV_VAR) {
        if value == "1" || value.eq_ignore_ascii_case("true") {
            enable();
        }
    }
}
