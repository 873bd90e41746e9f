use pathname::PathError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the logical working-directory primitive.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A path could not be normalized.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The kernel's working directory could not be read.
    #[error("failed to determine current directory: {source}")]
    CurrentDir {
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// A directory the logical working directory would name is not UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8 {
        /// The offending directory.
        path: PathBuf,
    },

    /// Changing the working directory failed.
    #[error("failed to change directory to '{path}': {source}")]
    Chdir {
        /// Target of the attempted change.
        path: String,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl PlatformError {
    /// Returns the underlying I/O error, if the failure came from the OS.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::CurrentDir { source } | Self::Chdir { source, .. } => Some(source),
            Self::Path(_) | Self::NonUtf8 { .. } => None,
        }
    }
}

/// Reports whether `error` is the OS's "too many levels of symbolic links"
/// failure.
#[must_use]
pub fn is_loop_error(error: &io::Error) -> bool {
    #[cfg(unix)]
    {
        error.raw_os_error() == Some(nix::errno::Errno::ELOOP as i32)
    }
    #[cfg(not(unix))]
    {
        let _ = error;
        false
    }
}
