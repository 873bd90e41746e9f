//! crates/platform/src/cwd.rs
//! Logical current directory that survives `..` after following links.

use crate::error::PlatformError;
use crate::status::stat_follow;
use pathname::{PathError, is_absolute, join_and_normalize, normalize};
use std::env;
use std::path::PathBuf;

/// The directory a process considers itself "in".
///
/// A kernel `chdir("..")` after entering a directory through a symbolic link
/// lands in the link target's parent. `LogicalCwd` instead keeps the logical
/// path as a normalized absolute string and always changes the physical
/// directory to that full path, so `..` steps back the way the walk came.
///
/// The value is owned by its caller; nothing here is global except the
/// process working directory itself, which [`set`](Self::set) keeps in step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicalCwd {
    logical: String,
}

impl LogicalCwd {
    /// Captures the process working directory.
    ///
    /// `$PWD` is preferred when it is absolute and names the same physical
    /// directory as the kernel's notion, since it preserves the link path the
    /// shell used to get there.
    pub fn current() -> Result<Self, PlatformError> {
        let physical = env::current_dir().map_err(|source| PlatformError::CurrentDir { source })?;
        let physical = physical
            .into_os_string()
            .into_string()
            .map_err(|raw| PlatformError::NonUtf8 {
                path: PathBuf::from(raw),
            })?;

        if let Ok(pwd) = env::var("PWD")
            && is_absolute(&pwd)
            && same_directory(&pwd, &physical)
        {
            return Ok(Self {
                logical: normalize(&pwd)?,
            });
        }

        Ok(Self {
            logical: normalize(&physical)?,
        })
    }

    /// Captures the working directory and then changes to `path`.
    pub fn at(path: &str) -> Result<Self, PlatformError> {
        let mut cwd = Self::current()?;
        cwd.set(path)?;
        Ok(cwd)
    }

    /// Returns the logical absolute path.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.logical
    }

    /// Resolves `path` against the logical directory without changing it.
    pub fn resolve(&self, path: &str) -> Result<String, PlatformError> {
        join_and_normalize(Some(&self.logical), Some(path))?
            .ok_or(PlatformError::Path(PathError::Empty))
    }

    /// Changes the logical and physical directory to `path`.
    ///
    /// Relative paths, including `..`, are resolved lexically against the
    /// logical directory. On failure neither directory changes.
    pub fn set(&mut self, path: &str) -> Result<(), PlatformError> {
        let target = self.resolve(path)?;
        env::set_current_dir(&target).map_err(|source| PlatformError::Chdir {
            path: target.clone(),
            source,
        })?;
        self.logical = target;
        Ok(())
    }
}

fn same_directory(left: &str, right: &str) -> bool {
    match (stat_follow(left), stat_follow(right)) {
        (Ok(left), Ok(right)) => left.identity() == right.identity(),
        _ => false,
    }
}
