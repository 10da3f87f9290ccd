//! Checkpoint reports of lifecycle tracking residue.

use std::fmt;

use crate::{CallSite, Identity, ProvenanceRecord};

/// Classifies a [`ReportEntry`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EntryKind {
    /// The identity was still live at a checkpoint: registered but never released.
    Leaked,

    /// The identity was released again after already having been released.
    DoubleRelease,

    /// The identity was released without ever having been registered.
    UnknownRelease,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaked => f.write_str("leaked"),
            Self::DoubleRelease => f.write_str("double-release"),
            Self::UnknownRelease => f.write_str("unknown-release"),
        }
    }
}

/// One diagnosed lifecycle defect: an identity, the call site it is attributed to and the
/// kind of defect.
///
/// Checkpoint reports consist of [`EntryKind::Leaked`] entries. The release-failure kinds
/// exist for harnesses that prefer to accumulate hook errors into the same report instead
/// of aborting on the first one; such entries are built with [`ReportEntry::new`].
#[derive(Clone, Copy, Debug)]
pub struct ReportEntry {
    kind: EntryKind,
    identity: Identity,
    call_site: CallSite,
    sequence: Option<u64>,
    last_reference: Option<CallSite>,
}

impl ReportEntry {
    /// Creates an entry attributing a defect of `kind` to `call_site`.
    #[must_use]
    pub const fn new(kind: EntryKind, identity: Identity, call_site: CallSite) -> Self {
        Self {
            kind,
            identity,
            call_site,
            sequence: None,
            last_reference: None,
        }
    }

    pub(crate) const fn leaked(record: &ProvenanceRecord) -> Self {
        Self {
            kind: EntryKind::Leaked,
            identity: record.identity(),
            call_site: record.call_site(),
            sequence: Some(record.sequence()),
            last_reference: record.last_reference(),
        }
    }

    /// The kind of defect this entry describes.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The identity of the object involved.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// The call site the defect is attributed to.
    ///
    /// For leaks this is the registration site; for release failures, the release site.
    #[must_use]
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }

    /// The registration sequence number, present for leak entries.
    #[must_use]
    pub const fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// The most recent reference attribution recorded for the object, if any.
    #[must_use]
    pub const fn last_reference(&self) -> Option<CallSite> {
        self.last_reference
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.identity)?;

        if let Some(sequence) = self.sequence {
            write!(f, " (#{sequence})")?;
        }

        write!(f, " at {}", self.call_site)?;

        if let Some(last_reference) = self.last_reference {
            write!(f, ", last referenced at {last_reference}")?;
        }

        Ok(())
    }
}

/// The outcome of walking the registry at a checkpoint.
///
/// Every record still live at the checkpoint becomes one [`EntryKind::Leaked`] entry,
/// ordered oldest-first so the earliest unreleased acquisition is most visible. An empty
/// report is the only "soft" checkpoint outcome.
///
/// # Examples
///
/// ```
/// use leak_tracker::{Identity, Session};
///
/// let session = Session::new();
/// session.mark_for_leak_detection(Identity::from_addr(0x1000))?;
///
/// let report = session.checkpoint();
/// assert_eq!(report.len(), 1);
/// report.print_to_stdout();
/// # Ok::<(), leak_tracker::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_residue(records: &[ProvenanceRecord]) -> Self {
        Self {
            entries: records.iter().map(ReportEntry::leaked).collect(),
        }
    }

    /// Appends an entry, typically a release failure a harness chose to accumulate.
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Merges two reports into a new report containing the entries of both, in order.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut entries =
            Vec::with_capacity(first.entries.len().saturating_add(second.entries.len()));
        entries.extend_from_slice(&first.entries);
        entries.extend_from_slice(&second.entries);
        Self { entries }
    }

    /// The diagnosed entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The number of diagnosed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the checkpoint found nothing to report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prints the report to stdout.
    ///
    /// Prints nothing at all if the report is empty - not even an empty line, which can be
    /// functionally critical when a test harness is speaking an output protocol.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }

        println!("{self}");
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f, "{} tracked object(s) with lifecycle defects:", self.len())?;

        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_displays_nothing() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn residue_becomes_leak_entries_oldest_first() {
        let records = vec![
            ProvenanceRecord::new(Identity::from_addr(0x100), CallSite::label("first"), 0),
            ProvenanceRecord::new(Identity::from_addr(0x200), CallSite::label("second"), 1),
        ];

        let report = Report::from_residue(&records);

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries()[0].kind(), EntryKind::Leaked);
        assert_eq!(report.entries()[0].sequence(), Some(0));
        assert_eq!(report.entries()[1].sequence(), Some(1));
    }

    #[test]
    fn display_attributes_each_entry() {
        let records = vec![ProvenanceRecord::new(
            Identity::from_addr(0xf00),
            CallSite::label("cairo_surface_create"),
            7,
        )];

        let rendered = Report::from_residue(&records).to_string();

        assert!(rendered.contains("leaked"));
        assert!(rendered.contains("0xf00"));
        assert!(rendered.contains("cairo_surface_create"));
        assert!(rendered.contains("#7"));
    }

    #[test]
    fn pushed_release_failures_render_their_kind() {
        let mut report = Report::new();
        report.push(ReportEntry::new(
            EntryKind::DoubleRelease,
            Identity::from_addr(0x100),
            CallSite::label("drop_layout"),
        ));
        report.push(ReportEntry::new(
            EntryKind::UnknownRelease,
            Identity::from_addr(0x200),
            CallSite::label("drop_pattern"),
        ));

        let rendered = report.to_string();
        assert!(rendered.contains("double-release"));
        assert!(rendered.contains("unknown-release"));
    }

    #[test]
    fn merge_concatenates_entries() {
        let mut first = Report::new();
        first.push(ReportEntry::new(
            EntryKind::Leaked,
            Identity::from_addr(0x100),
            CallSite::label("a"),
        ));

        let mut second = Report::new();
        second.push(ReportEntry::new(
            EntryKind::Leaked,
            Identity::from_addr(0x200),
            CallSite::label("b"),
        ));

        let merged = Report::merge(&first, &second);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.entries()[0].identity(), Identity::from_addr(0x100));
        assert_eq!(merged.entries()[1].identity(), Identity::from_addr(0x200));
    }

    static_assertions::assert_impl_all!(Report: Send, Sync);
}
