//! Call site provenance tokens.

use std::fmt;
use std::panic::Location;

/// An opaque token identifying where in calling code a tracked lifecycle event occurred.
///
/// Attribution always points at the caller of the binding layer, never at code inside the
/// external library, because the external allocation itself is opaque. The usual way to
/// obtain a `CallSite` is implicitly: the lifecycle hooks are `#[track_caller]` and capture
/// the wrapping call's source location on their own. Generated wrapper code that prefers
/// symbolic attribution can construct one explicitly with [`CallSite::label`].
///
/// # Examples
///
/// ```
/// use leak_tracker::CallSite;
///
/// let here = CallSite::caller();
/// assert!(here.to_string().contains(file!()));
///
/// let labeled = CallSite::label("cairo_surface_create");
/// assert_eq!(labeled.to_string(), "cairo_surface_create");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CallSite(Repr);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum Repr {
    Location(&'static Location<'static>),
    Label(&'static str),
}

impl CallSite {
    /// Captures the source location of the calling code.
    ///
    /// Propagates through `#[track_caller]` functions, so a hook that calls this refers
    /// to the hook's own caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self(Repr::Location(Location::caller()))
    }

    /// Creates a call site from a symbolic label.
    ///
    /// Intended for generated wrapper code where a function name is more useful
    /// attribution than a source location inside the generator output.
    #[must_use]
    pub const fn label(label: &'static str) -> Self {
        Self(Repr::Label(label))
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Location(location) => write!(
                f,
                "{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            Repr::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_points_at_this_file() {
        let site = CallSite::caller();
        assert!(site.to_string().contains(file!()));
    }

    #[test]
    fn caller_captures_distinct_lines() {
        let first = CallSite::caller();
        let second = CallSite::caller();
        assert_ne!(first, second);
    }

    #[test]
    fn label_displays_verbatim() {
        let site = CallSite::label("pango_layout_new");
        assert_eq!(site.to_string(), "pango_layout_new");
    }

    #[test]
    fn same_label_compares_equal() {
        assert_eq!(CallSite::label("x"), CallSite::label("x"));
        assert_ne!(CallSite::label("x"), CallSite::label("y"));
    }

    static_assertions::assert_impl_all!(CallSite: Send, Sync, Copy);
}
