//! Lifecycle tracking and leak detection for objects owned by external native libraries.
//!
//! Language bindings that forward hundreds of calls to a native 2D-graphics or text-layout
//! library cannot rely on Rust's ownership rules to catch lifecycle bugs: the objects are
//! created, reference-counted and destroyed inside a library the binding does not control.
//! This package observes those lifecycles from the outside and detects the two bug classes
//! ownership cannot see - objects that are never released (leaks) and releases of objects
//! that were never registered or were already released (double-release / unknown-release).
//!
//! The core pieces:
//!
//! - [`Session`] - a tracking window exposing the three lifecycle hooks and the checkpoint
//! - [`Registry`] - the identity-keyed table of live [`ProvenanceRecord`]s behind a session
//! - [`Report`] - site-attributed diagnostics produced at a checkpoint
//! - [`hooks`] - ambient process-wide hooks for forwarding layers without a session to hand around
//! - [`tracing`] - the toggle that makes the ambient hooks free when disabled
//!
//! One identity-keyed map covers every wrapped object kind: the core needs only an address
//! and a call site, never the object's shape, so the hook contract stays uniform across
//! hundreds of heterogeneous opaque types.
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # Simple usage
//!
//! ```
//! use leak_tracker::{Identity, Session};
//!
//! fn main() -> Result<(), leak_tracker::Error> {
//!     let session = Session::new();
//!
//!     // The binding wrapped an external create call that succeeded.
//!     let surface = Identity::from_addr(0x5100);
//!     session.mark_for_leak_detection(surface)?;
//!
//!     // ... the object is used, perhaps referenced ...
//!     session.reference(surface);
//!
//!     // The binding wrapped the matching release call.
//!     session.destroy(surface)?;
//!
//!     // End of test: anything still live is a leak.
//!     session.assert_no_leaks();
//!     Ok(())
//! }
//! ```
//!
//! # Catching a leak
//!
//! ```
//! use leak_tracker::{Identity, Session};
//!
//! let session = Session::new();
//! session.mark_for_leak_detection(Identity::from_addr(0x5200))?;
//!
//! // The matching destroy never happens.
//! let report = session.checkpoint();
//! assert_eq!(report.len(), 1);
//! println!("{report}");
//! # Ok::<(), leak_tracker::Error>(())
//! ```
//!
//! # Hook contract
//!
//! Every wrapped "create"-style call first invokes the external library, checks its status
//! and only on success calls [`Session::mark_for_leak_detection`]. Every "destroy"-style
//! call invokes [`Session::destroy`] unconditionally, even along error paths, so
//! bookkeeping never silently leaks. "Reference"-style calls invoke [`Session::reference`]
//! purely for attribution and never decide whether the external object is still alive.
//!
//! # Overhead
//!
//! The ambient hooks in [`hooks`] check the [`tracing`] toggle first - a single relaxed
//! atomic load - and return immediately while it is off, without initializing the
//! process-wide registry. When on, each hook is one short critical section over a coarse
//! lock; the tracked external objects are themselves typically single-threaded, so
//! contention is expected to be low.

mod call_site;
mod constants;
mod error;
mod identity;
mod record;
mod registry;
mod report;
mod session;

pub mod hooks;
pub mod tracing;

pub use call_site::CallSite;
pub use error::Error;
pub use identity::Identity;
pub use record::ProvenanceRecord;
pub use registry::Registry;
pub use report::{EntryKind, Report, ReportEntry};
pub use session::Session;
