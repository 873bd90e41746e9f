use pathname::PathError;
use platform::PlatformError;
use std::io;
use thiserror::Error;

/// Error reported while walking a directory tree.
///
/// Every variant carries the path it concerns so visitors can surface
/// actionable diagnostics without inspecting the variant.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A directory could not be opened for enumeration.
    #[error("failed to open directory '{path}': {source}")]
    OpenDir {
        /// Directory that failed to open.
        path: String,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// Reading the next entry from a directory failed.
    #[error("failed to read entry in '{path}': {source}")]
    ReadEntry {
        /// Directory being enumerated.
        path: String,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// A status query to resolve an entry's kind failed.
    #[error("failed to inspect '{path}': {source}")]
    Status {
        /// Entry whose status was queried.
        path: String,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// Changing the logical working directory failed.
    #[error("failed to change directory to '{path}': {source}")]
    ChangeDir {
        /// Target of the attempted change.
        path: String,
        /// Underlying platform failure.
        #[source]
        source: PlatformError,
    },

    /// The logical working directory could not be captured.
    #[error("failed to capture working directory: {source}")]
    CurrentDir {
        /// Underlying platform failure.
        #[source]
        source: PlatformError,
    },

    /// A path could not be synthesized or normalized.
    #[error("invalid path '{path}': {source}")]
    InvalidPath {
        /// The offending path or fragment.
        path: String,
        /// Normalization failure.
        #[source]
        source: PathError,
    },

    /// The visitor returned [`VisitOutcome::Error`](crate::VisitOutcome::Error).
    #[error("visitor reported an error for '{path}'")]
    Visitor {
        /// Path of the event that was rejected.
        path: String,
    },
}

impl WalkError {
    pub(crate) fn open_dir(path: &str, source: io::Error) -> Self {
        Self::OpenDir {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn read_entry(path: &str, source: io::Error) -> Self {
        Self::ReadEntry {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn status(path: &str, source: io::Error) -> Self {
        Self::Status {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn change_dir(path: &str, source: PlatformError) -> Self {
        Self::ChangeDir {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn invalid_path(path: &str, source: PathError) -> Self {
        Self::InvalidPath {
            path: path.to_owned(),
            source,
        }
    }

    /// Returns the path associated with the error.
    ///
    /// [`WalkError::CurrentDir`] has no path of its own and returns `"."`.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::OpenDir { path, .. }
            | Self::ReadEntry { path, .. }
            | Self::Status { path, .. }
            | Self::ChangeDir { path, .. }
            | Self::InvalidPath { path, .. }
            | Self::Visitor { path } => path,
            Self::CurrentDir { .. } => ".",
        }
    }

    /// Classifies the failure.
    #[must_use]
    pub fn kind(&self) -> WalkErrorKind {
        match self {
            Self::OpenDir { source, .. }
            | Self::ReadEntry { source, .. }
            | Self::Status { source, .. } => WalkErrorKind::from_io(source),
            Self::ChangeDir {
                source: PlatformError::NonUtf8 { .. },
                ..
            } => WalkErrorKind::InvalidName,
            Self::ChangeDir { source, .. } | Self::CurrentDir { source } => source
                .io_error()
                .map_or(WalkErrorKind::Other, WalkErrorKind::from_io),
            Self::InvalidPath { .. } => WalkErrorKind::InvalidName,
            Self::Visitor { .. } => WalkErrorKind::Visitor,
        }
    }
}

/// Classification of walk failures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WalkErrorKind {
    /// The path does not exist (or vanished mid-walk).
    NotFound,
    /// Access was refused.
    PermissionDenied,
    /// A path component is not a directory.
    NotADirectory,
    /// The OS reported a symbolic-link loop.
    Cycle,
    /// The OS ran out of memory while serving the request.
    OutOfMemory,
    /// An entry name or path could not be represented.
    InvalidName,
    /// The visitor rejected an event.
    Visitor,
    /// Any other operating-system failure.
    Other,
}

impl WalkErrorKind {
    /// Maps an [`io::Error`] onto the taxonomy.
    #[must_use]
    pub fn from_io(error: &io::Error) -> Self {
        if platform::is_loop_error(error) {
            return Self::Cycle;
        }
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            io::ErrorKind::OutOfMemory => Self::OutOfMemory,
            io::ErrorKind::InvalidData => Self::InvalidName,
            _ => Self::Other,
        }
    }
}
