//! Identities of externally-owned tracked objects.

use std::fmt;
use std::ptr::NonNull;

/// The identity of a tracked object: the address of an object owned by an external library.
///
/// The tracking core never dereferences the address. It is purely a unique key, observed when
/// the external library hands out a handle and observed again when the handle is released.
/// One `Identity` type covers every wrapped object kind; the core never needs the object's
/// shape, only its address.
///
/// # Examples
///
/// ```
/// use leak_tracker::Identity;
///
/// let value = 42_u32;
/// let identity = Identity::from_ptr(&raw const value);
/// assert_eq!(identity, Identity::from_ptr(&raw const value));
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Identity(usize);

impl Identity {
    /// Creates an identity from a raw address.
    ///
    /// Useful when the external handle is already an integer, or in tests where
    /// no real object exists behind the identity.
    #[must_use]
    pub const fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    /// Creates an identity from a raw pointer to an externally-owned object.
    ///
    /// The pointer is only used for its address and is never dereferenced.
    #[must_use]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr.addr())
    }

    /// Creates an identity from a non-null pointer to an externally-owned object.
    #[must_use]
    pub fn from_non_null<T>(ptr: NonNull<T>) -> Self {
        Self(ptr.addr().get())
    }

    /// The raw address this identity was created from.
    #[must_use]
    pub const fn addr(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:#x})", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
