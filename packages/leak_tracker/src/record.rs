//! Provenance records for live tracked objects.

use std::fmt;

use crate::{CallSite, Identity};

/// One entry per live tracked object: its identity, the call site that registered it and
/// a monotonically increasing sequence number assigned at registration.
///
/// The sequence number orders records for deterministic, reproducible reports; it never
/// resets within a process, so records from different tracking windows still sort into
/// their true creation order.
#[derive(Clone, Copy, Debug)]
pub struct ProvenanceRecord {
    identity: Identity,
    call_site: CallSite,
    sequence: u64,
    last_reference: Option<CallSite>,
}

impl ProvenanceRecord {
    pub(crate) const fn new(identity: Identity, call_site: CallSite, sequence: u64) -> Self {
        Self {
            identity,
            call_site,
            sequence,
            last_reference: None,
        }
    }

    /// The identity of the tracked object.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// The call site that registered the object.
    #[must_use]
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }

    /// The registration order of this record, ascending from the start of the process.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The most recent site that bumped the external reference count, if any.
    ///
    /// Attribution only; the external library remains authoritative for the true count.
    #[must_use]
    pub const fn last_reference(&self) -> Option<CallSite> {
        self.last_reference
    }

    pub(crate) const fn set_last_reference(&mut self, call_site: CallSite) {
        self.last_reference = Some(call_site);
    }
}

impl fmt::Display for ProvenanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} registered at {}",
            self.sequence, self.identity, self.call_site
        )?;

        if let Some(last_reference) = self.last_reference {
            write!(f, ", last referenced at {last_reference}")?;
        }

        Ok(())
    }
}
