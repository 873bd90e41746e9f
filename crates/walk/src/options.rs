/// Behaviour switches for a single walk.
///
/// Options are immutable for the duration of a walk. The default recurses into
/// subdirectories and leaves every other switch off; `max_depth == 0` means
/// unlimited depth.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkOptions {
    pub(crate) ignore_errors: bool,
    pub(crate) recurse: bool,
    pub(crate) follow_links: bool,
    pub(crate) quiet: bool,
    pub(crate) max_depth: usize,
    pub(crate) directories_only: bool,
    pub(crate) files_only: bool,
    pub(crate) visit_once: bool,
    pub(crate) change_directory: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkOptions {
    /// Creates the default option set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_errors: false,
            recurse: true,
            follow_links: false,
            quiet: false,
            max_depth: 0,
            directories_only: false,
            files_only: false,
            visit_once: false,
            change_directory: false,
        }
    }

    /// Continues past open, read, and visitor errors instead of abandoning the
    /// current directory level.
    ///
    /// Directories that cannot be opened are skipped without being counted.
    #[must_use]
    pub const fn ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }

    /// Descends into subdirectories. When disabled only the root's entries
    /// are reported.
    #[must_use]
    pub const fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    /// Resolves symbolic links to decide the kind reported for an entry.
    ///
    /// A link whose target is a directory is descended into. A dangling link
    /// is reported as a link and is not an error.
    #[must_use]
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Suppresses warnings and error callbacks for errors that are tolerated.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Limits how deep entries are reported; the root's entries are at depth
    /// one. Zero removes the limit.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Reports only entries that resolve to directories.
    #[must_use]
    pub const fn directories_only(mut self, only: bool) -> Self {
        self.directories_only = only;
        self
    }

    /// Reports only entries that do not resolve to directories.
    #[must_use]
    pub const fn files_only(mut self, only: bool) -> Self {
        self.files_only = only;
        self
    }

    /// Enters each physical directory at most once.
    #[must_use]
    pub const fn visit_once(mut self, once: bool) -> Self {
        self.visit_once = once;
        self
    }

    /// Keeps the process working directory inside the directory being
    /// enumerated, restoring it on every exit path.
    ///
    /// Event paths are then absolute logical paths, valid from inside the
    /// callback whatever the working directory.
    #[must_use]
    pub const fn change_directory(mut self, change: bool) -> Self {
        self.change_directory = change;
        self
    }

    /// Whether entries at `depth` may be descended into.
    pub(crate) const fn allows_descent_from(&self, depth: usize) -> bool {
        self.recurse && (self.max_depth == 0 || depth < self.max_depth)
    }

    /// Whether an entry resolving to `is_dir` passes the kind filters.
    pub(crate) const fn reports(&self, is_dir: bool) -> bool {
        if is_dir {
            !self.files_only
        } else {
            !self.directories_only
        }
    }
}
