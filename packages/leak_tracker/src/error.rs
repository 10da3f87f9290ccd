//! Error types for lifecycle tracking violations.

use thiserror::Error;

use crate::{CallSite, Identity};

/// Errors raised when observed lifecycle events contradict the tracked state.
///
/// Both variants are fatal by design: they indicate a misplaced hook in the forwarding
/// layer, an aliased return value from the external library, or a genuine double-release.
/// Recovering silently would mask the precise defect this layer exists to surface, so
/// callers are expected to propagate or panic, never to swallow these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An identity was registered while it was already live.
    ///
    /// Either the external library returned an alias to a "new" object that is actually
    /// still tracked, or a creation hook fired twice for the same handle. All subsequent
    /// attribution for this identity would be corrupt.
    #[error(
        "duplicate registration of {identity}: first registered at {original}, registered again at {duplicate}"
    )]
    DuplicateRegistration {
        /// The identity that was already live.
        identity: Identity,

        /// The call site of the original, still-live registration.
        original: CallSite,

        /// The call site of the conflicting registration.
        duplicate: CallSite,
    },

    /// An identity was released while it was not live.
    ///
    /// Covers both a release of something never registered and a second release of
    /// something already released.
    #[error("release of untracked {identity} at {release_site}: never registered or already released")]
    UnknownRelease {
        /// The identity that was not live.
        identity: Identity,

        /// The call site of the offending release.
        release_site: CallSite,
    },
}

/// A specialized `Result` type for lifecycle tracking operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn duplicate_registration_names_both_sites() {
        let error = Error::DuplicateRegistration {
            identity: Identity::from_addr(0x20),
            original: CallSite::label("first"),
            duplicate: CallSite::label("second"),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("0x20"));
        assert!(rendered.contains("first"));
        assert!(rendered.contains("second"));
    }

    #[test]
    fn unknown_release_names_release_site() {
        let error = Error::UnknownRelease {
            identity: Identity::from_addr(0x30),
            release_site: CallSite::label("drop_surface"),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("0x30"));
        assert!(rendered.contains("drop_surface"));
    }
}
