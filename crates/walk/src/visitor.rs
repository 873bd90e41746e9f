use crate::error::WalkError;
use crate::reader::DirEntry;
use platform::EntryKind;

/// Event delivered to a [`Visitor`].
#[derive(Clone, Copy, Debug)]
pub enum WalkEvent<'a> {
    /// A directory was opened and is about to be enumerated.
    ///
    /// Delivered for every opened directory, including the root, regardless
    /// of the kind filters.
    DirEntered {
        /// Display path of the directory; absolute when the walk changes
        /// directory.
        path: &'a str,
        /// Depth of the directory; the root is at depth zero.
        depth: usize,
    },
    /// An entry passed the kind filters.
    Entry {
        /// Display path of the entry; absolute when the walk changes
        /// directory. Invalid UTF-8 in names is replaced here, while
        /// [`DirEntry::name`] keeps the raw name.
        path: &'a str,
        /// Name and kind as reported by the directory reader.
        entry: &'a DirEntry,
        /// Kind after following links when that was requested.
        resolved: EntryKind,
        /// Depth of the entry; the root's entries are at depth one.
        depth: usize,
    },
}

impl<'a> WalkEvent<'a> {
    /// Display path of the directory or entry.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        match self {
            Self::DirEntered { path, .. } | Self::Entry { path, .. } => path,
        }
    }

    /// Depth of the event.
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::DirEntered { depth, .. } | Self::Entry { depth, .. } => *depth,
        }
    }
}

/// Verdict returned by a visitor for each event.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VisitOutcome {
    /// Keep going.
    #[default]
    Continue,
    /// Count an error. Unless errors are ignored the current directory level
    /// is abandoned; ancestors continue with their remaining entries.
    Error,
    /// Stop the whole walk immediately.
    Abort,
}

/// Receives walk events.
///
/// Any `FnMut(&WalkEvent<'_>) -> VisitOutcome` closure is a visitor.
pub trait Visitor {
    /// Handles one event.
    fn visit(&mut self, event: &WalkEvent<'_>) -> VisitOutcome;

    /// Observes an error the walker counted.
    ///
    /// Tolerated errors are not reported here when the walk is quiet.
    fn on_error(&mut self, error: &WalkError) {
        let _ = error;
    }
}

impl<F> Visitor for F
where
    F: FnMut(&WalkEvent<'_>) -> VisitOutcome,
{
    fn visit(&mut self, event: &WalkEvent<'_>) -> VisitOutcome {
        self(event)
    }
}
