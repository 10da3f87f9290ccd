//! Lifecycle tracking sessions.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::constants::ERR_POISONED_LOCK;
use crate::error::Result;
use crate::{CallSite, Identity, Registry, Report};

/// A lifecycle tracking window over a set of externally-owned objects.
///
/// A session owns a [`Registry`] behind a coarse lock and exposes the three hooks the
/// forwarding layer calls plus the checkpoint that turns residue into a [`Report`]. The
/// hooks are `#[track_caller]`, so attribution points at the code that called into the
/// binding, not at the tracking core.
///
/// The hook contract, for every wrapped external API:
///
/// - after every *successful* acquire/create/copy call: [`mark_for_leak_detection`](Self::mark_for_leak_detection);
/// - on every release call, unconditionally, error paths included: [`destroy`](Self::destroy);
/// - on every external refcount increment: [`reference`](Self::reference).
///
/// Cloning a session is cheap and shares the same registry, so multiple binding shims can
/// feed one tracking window. A test harness typically creates a fresh session per test and
/// ends it with [`assert_no_leaks`](Self::assert_no_leaks). Process-wide ambient hooks
/// gated by the [tracing toggle](crate::tracing) are available in [`crate::hooks`].
///
/// # Examples
///
/// ```
/// use leak_tracker::{Identity, Session};
///
/// let session = Session::new();
/// let handle = Identity::from_addr(0x7000);
///
/// // The binding forwarded a create call and the external library reported success.
/// session.mark_for_leak_detection(handle)?;
///
/// // The binding forwarded the matching release call.
/// session.destroy(handle)?;
///
/// session.assert_no_leaks();
/// # Ok::<(), leak_tracker::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    registry: Arc<Mutex<Registry>>,
}

impl Session {
    /// Creates a new session with an empty registry.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default session' that is not actually a default session"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Starts tracking `identity`, attributing the acquisition to the calling code.
    ///
    /// Call after every successful acquire/create/copy call into the external library.
    /// Only call on success: a failed external call produced nothing to track.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`](crate::Error::DuplicateRegistration) if
    /// `identity` is already live. Fatal by design; do not swallow.
    #[track_caller]
    pub fn mark_for_leak_detection(&self, identity: Identity) -> Result<()> {
        let call_site = CallSite::caller();
        self.registry
            .lock()
            .expect(ERR_POISONED_LOCK)
            .register(identity, call_site)
    }

    /// Records an external refcount increment against `identity` for attribution.
    ///
    /// Best-effort and never fails: the external library is authoritative for the true
    /// reference count, and this observation must not gate or alter the destroy contract.
    #[track_caller]
    pub fn reference(&self, identity: Identity) {
        let call_site = CallSite::caller();
        self.registry
            .lock()
            .expect(ERR_POISONED_LOCK)
            .bump_reference(identity, call_site);
    }

    /// Stops tracking `identity`.
    ///
    /// Call on every release call into the external library, unconditionally - including
    /// paths where the object's status indicates an error, because an erroring object still
    /// consumed external resources. A single destroy fully retires the identity regardless
    /// of how many [`reference`](Self::reference) attributions preceded it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelease`](crate::Error::UnknownRelease) if `identity` is not
    /// live: the release had no matching registration, or the object was already released.
    /// Fatal by design; do not swallow.
    #[track_caller]
    pub fn destroy(&self, identity: Identity) -> Result<()> {
        let call_site = CallSite::caller();
        self.registry
            .lock()
            .expect(ERR_POISONED_LOCK)
            .unregister(identity, call_site)
    }

    /// Drains the registry and reports every identity still live as a leak.
    ///
    /// The drain and the report construction happen in one critical section, so an object
    /// concurrently (and legitimately) being released is never reported as leaked. After
    /// the checkpoint the session tracks a fresh window; tests do not cross-contaminate
    /// each other's leak state.
    #[must_use = "the report is the only record of the drained tracking window"]
    pub fn checkpoint(&self) -> Report {
        let residue = self.registry.lock().expect(ERR_POISONED_LOCK).drain();
        Report::from_residue(&residue)
    }

    /// Checkpoints the session and panics with the rendered report if anything leaked.
    ///
    /// The usual way for a test to end its tracking window.
    ///
    /// # Panics
    ///
    /// Panics if one or more identities were still live at the checkpoint.
    #[track_caller]
    pub fn assert_no_leaks(&self) {
        let report = self.checkpoint();
        assert!(
            report.is_empty(),
            "outstanding leaks at checkpoint:\n{report}"
        );
    }

    /// The number of currently live tracked identities.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.registry.lock().expect(ERR_POISONED_LOCK).len()
    }

    /// Whether no identity is currently tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.lock().expect(ERR_POISONED_LOCK).is_empty()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tracked object(s)", self.tracked_count())
    }
}
