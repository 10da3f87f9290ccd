//! The table of live tracked objects.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::Result;
use crate::{CallSite, Error, Identity, ProvenanceRecord};

/// A table of provenance records keyed by object identity, one record per live tracked object.
///
/// The registry only observes liveness; the tracked objects themselves are owned by an
/// external library. An identity being present means the external library still considered
/// the object live as of the last observed lifecycle event.
///
/// The registry itself is not synchronized. [`Session`][crate::Session] wraps one in a
/// coarse mutex for use from the forwarding layer; a test harness can also drive a registry
/// directly when it owns the only reference.
///
/// # Examples
///
/// ```
/// use leak_tracker::{CallSite, Identity, Registry};
///
/// let mut registry = Registry::new();
/// let identity = Identity::from_addr(0x1000);
///
/// registry.register(identity, CallSite::caller())?;
/// assert_eq!(registry.len(), 1);
///
/// registry.unregister(identity, CallSite::caller())?;
/// assert!(registry.is_empty());
/// # Ok::<(), leak_tracker::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    records: HashMap<Identity, ProvenanceRecord>,
    next_sequence: u64,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new provenance record for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if `identity` is already live. This is a
    /// fatal condition, not a recoverable one: it means the wrapped library returned an
    /// alias to a "new" object that is actually still tracked, which corrupts all
    /// subsequent attribution for that identity.
    pub fn register(&mut self, identity: Identity, call_site: CallSite) -> Result<()> {
        match self.records.entry(identity) {
            Entry::Occupied(existing) => Err(Error::DuplicateRegistration {
                identity,
                original: existing.get().call_site(),
                duplicate: call_site,
            }),
            Entry::Vacant(slot) => {
                let sequence = self.next_sequence;
                self.next_sequence = sequence
                    .checked_add(1)
                    .expect("registration sequence overflows u64 - this indicates an unrealistic scenario");

                slot.insert(ProvenanceRecord::new(identity, call_site, sequence));
                Ok(())
            }
        }
    }

    /// Removes the provenance record for `identity`.
    ///
    /// A single unregister fully retires the identity regardless of how many reference
    /// attributions were recorded for it, mirroring how the external library's own destroy
    /// call decrements its internal count exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelease`] if `identity` is not live, signaling a release of
    /// something never registered or already released (double-release). The `call_site`
    /// identifies the offending release in the error.
    pub fn unregister(&mut self, identity: Identity, call_site: CallSite) -> Result<()> {
        self.records
            .remove(&identity)
            .map(|_| ())
            .ok_or(Error::UnknownRelease {
                identity,
                release_site: call_site,
            })
    }

    /// Records a reference-count increment against a live identity.
    ///
    /// Attribution only: liveness does not change and the identity is not required to be
    /// live, because the external library, not this registry, is authoritative for the
    /// true reference count. An increment observed for an untracked identity is silently
    /// ignored.
    pub fn bump_reference(&mut self, identity: Identity, call_site: CallSite) {
        if let Some(record) = self.records.get_mut(&identity) {
            record.set_last_reference(call_site);
        }
    }

    /// Returns the live records ordered by sequence ascending (creation order).
    #[must_use]
    pub fn snapshot(&self) -> Vec<ProvenanceRecord> {
        let mut records: Vec<ProvenanceRecord> = self.records.values().copied().collect();
        records.sort_unstable_by_key(ProvenanceRecord::sequence);
        records
    }

    /// Removes and returns all live records ordered by sequence ascending.
    ///
    /// Starts a fresh tracking window; the sequence counter keeps running so record order
    /// stays comparable across windows.
    #[must_use]
    pub fn drain(&mut self) -> Vec<ProvenanceRecord> {
        let mut records: Vec<ProvenanceRecord> =
            self.records.drain().map(|(_, record)| record).collect();
        records.sort_unstable_by_key(ProvenanceRecord::sequence);
        records
    }

    /// The number of currently live identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no identity is currently live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
