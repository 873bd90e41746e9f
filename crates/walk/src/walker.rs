//! crates/walk/src/walker.rs
//! Recursive depth-first traversal driving a [`Visitor`].

use crate::error::WalkError;
use crate::options::WalkOptions;
use crate::reader::{DirEntry, DirReader};
use crate::stats::WalkStatistics;
use crate::visited::VisitedSet;
use crate::visitor::{VisitOutcome, Visitor, WalkEvent};
use logging::{debug_log, info_log};
use pathname::{join_and_normalize, normalize};
use platform::{DirIdentity, EntryKind, LogicalCwd, PlatformError, stat_follow};
use std::path::{Path, PathBuf};

/// How a walk finished.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkOutcome {
    /// Every reachable entry was processed without error.
    Complete,
    /// The walk ran to completion but counted this many errors.
    Errors(u64),
    /// The visitor asked to stop.
    Aborted,
}

impl WalkOutcome {
    /// Integer form: `0` when complete, the error count, or `-1` when aborted.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Complete => 0,
            Self::Errors(count) => i64::try_from(count).unwrap_or(i64::MAX),
            Self::Aborted => -1,
        }
    }

    /// Whether the walk completed without errors.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Walks the tree rooted at `root`, reporting every entry to `visitor`.
///
/// `root` is opened as a directory. Entries are reported with display paths
/// built by joining names onto `root`; the root itself appears only as the
/// first [`WalkEvent::DirEntered`]. With [`WalkOptions::change_directory`]
/// the root is first resolved against the logical working directory, so
/// every event path is absolute and can be opened from inside the callback.
/// Counters are added to `stats`, so one value can aggregate several walks.
///
/// # Errors
///
/// Failures inside the tree are counted and reported through the returned
/// [`WalkOutcome`]. An `Err` is returned only when `root` is empty, or when
/// [`WalkOptions::change_directory`] is set and the working directory cannot
/// be captured.
pub fn walk<V>(
    root: &str,
    options: &WalkOptions,
    stats: &mut WalkStatistics,
    visitor: &mut V,
) -> Result<WalkOutcome, WalkError>
where
    V: Visitor + ?Sized,
{
    let mut visited = VisitedSet::new();
    walk_with_visited(root, options, stats, &mut visited, visitor)
}

/// Like [`walk`], recording entered directories in a caller-owned set.
///
/// With [`WalkOptions::visit_once`] a directory already present in `visited`
/// is skipped, so successive walks sharing the set never enter the same
/// physical directory twice.
///
/// # Errors
///
/// Same as [`walk`].
pub fn walk_with_visited<V>(
    root: &str,
    options: &WalkOptions,
    stats: &mut WalkStatistics,
    visited: &mut VisitedSet,
    visitor: &mut V,
) -> Result<WalkOutcome, WalkError>
where
    V: Visitor + ?Sized,
{
    let display = normalize(root).map_err(|source| WalkError::invalid_path(root, source))?;
    let mut cwd = if options.change_directory {
        Some(LogicalCwd::current().map_err(|source| WalkError::CurrentDir { source })?)
    } else {
        None
    };
    let errors_before = stats.errors_encountered;

    debug_log!(Walk, 1, "walking {}", display);
    let flow = {
        let mut walker = Walker {
            options,
            stats: &mut *stats,
            visited,
            visitor,
            cwd: cwd.as_mut(),
        };
        walker.walk_root(&display)
    };

    let errors = stats.errors_encountered - errors_before;
    debug_log!(
        Walk,
        1,
        "finished {}: {} directories, {} entries, {} errors",
        display,
        stats.directories_visited,
        stats.entries_processed,
        errors
    );
    Ok(match flow {
        Flow::Aborted => WalkOutcome::Aborted,
        _ if errors == 0 => WalkOutcome::Complete,
        Flow::Continue | Flow::Failed | Flow::Stranded => WalkOutcome::Errors(errors),
    })
}

/// Result of processing one level or one entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    /// The level was abandoned after an error; ancestors carry on.
    Failed,
    /// The working directory could not be restored after a child; the
    /// enclosing level stops too, since its entries would be handled from
    /// the wrong place.
    Stranded,
    /// The visitor aborted; everything unwinds.
    Aborted,
}

/// Paths for one directory or entry.
///
/// `display` is what the visitor sees; names that are not UTF-8 appear in it
/// lossily. `access` is the exact path handed to the OS.
struct Location {
    display: String,
    access: PathBuf,
}

struct Walker<'a, V: ?Sized> {
    options: &'a WalkOptions,
    stats: &'a mut WalkStatistics,
    visited: &'a mut VisitedSet,
    visitor: &'a mut V,
    cwd: Option<&'a mut LogicalCwd>,
}

impl<V: Visitor + ?Sized> Walker<'_, V> {
    fn walk_root(&mut self, display: &str) -> Flow {
        let display = match self.cwd.as_deref() {
            Some(cwd) => match cwd.resolve(display) {
                Ok(absolute) => absolute,
                Err(source) => return self.open_failed(WalkError::change_dir(display, source)),
            },
            None => display.to_owned(),
        };
        let root = Location {
            access: PathBuf::from(&display),
            display,
        };

        if self.options.visit_once {
            // An unreadable root fails again when opened, which reports it.
            if let Ok(status) = stat_follow(&root.access)
                && !self.visited.insert(status.into_identity())
            {
                debug_log!(Dup, 1, "root {} already visited", root.display);
                return Flow::Continue;
            }
        }

        let Some(origin) = self.cwd.as_deref().map(|cwd| cwd.get().to_owned()) else {
            return self.walk_level(&root, 0);
        };
        self.descend(&root, 0, Path::new(&origin))
    }

    /// Changes into `dir`, walks it, and changes back to `return_to`.
    fn descend(&mut self, dir: &Location, depth: usize, return_to: &Path) -> Flow {
        if let Some(cwd) = self.cwd.as_deref_mut() {
            if let Err(source) = utf8(&dir.access).and_then(|target| cwd.set(target)) {
                return self.open_failed(WalkError::change_dir(&dir.display, source));
            }
            debug_log!(Chdir, 1, "entered {}", cwd.get());
        }

        let flow = self.walk_level(dir, depth);

        let Some(cwd) = self.cwd.as_deref_mut() else {
            return flow;
        };
        match utf8(return_to).and_then(|target| cwd.set(target)) {
            Ok(()) => {
                debug_log!(Chdir, 1, "returned to {}", cwd.get());
                // Back in place: a stranded child level only failed this one.
                if flow == Flow::Stranded {
                    Flow::Failed
                } else {
                    flow
                }
            }
            Err(source) => {
                let error = WalkError::change_dir(&return_to.to_string_lossy(), source);
                self.tolerate(&error);
                if flow == Flow::Aborted {
                    Flow::Aborted
                } else {
                    Flow::Stranded
                }
            }
        }
    }

    /// Opens `dir`, reports it, and processes its entries.
    fn walk_level(&mut self, dir: &Location, depth: usize) -> Flow {
        let mut reader = match DirReader::open(&dir.access) {
            Ok(reader) => reader,
            Err(error) => return self.open_failed(rename(error, &dir.display)),
        };
        self.stats.directories_visited += 1;
        debug_log!(Walk, 2, "entering {} at depth {}", dir.display, depth);

        let event = WalkEvent::DirEntered {
            path: &dir.display,
            depth,
        };
        let flow = self.deliver(&event);
        if flow != Flow::Continue {
            return flow;
        }

        let flow = loop {
            let entry = match reader.read_entry() {
                Ok(Some(entry)) => entry,
                Ok(None) => break Flow::Continue,
                Err(error) => {
                    // Status failures concern one entry; a failing stream ends
                    // the enumeration.
                    let stream_failed = matches!(error, WalkError::ReadEntry { .. });
                    if !self.tolerate(&rename(error, &dir.display)) {
                        break Flow::Failed;
                    }
                    if stream_failed {
                        break Flow::Continue;
                    }
                    continue;
                }
            };
            let flow = self.process_entry(dir, &entry, depth + 1);
            if flow != Flow::Continue {
                break flow;
            }
        };

        reader.close();
        debug_log!(Walk, 2, "leaving {}", dir.display);
        flow
    }

    /// Reports one entry and descends into it when it is a directory.
    fn process_entry(&mut self, parent: &Location, entry: &DirEntry, depth: usize) -> Flow {
        let child = match child_location(parent, entry) {
            Ok(child) => child,
            Err(error) => return self.entry_failed(&error),
        };

        let mut followed: Option<DirIdentity> = None;
        let resolved = if self.options.follow_links && entry.kind().is_symlink() {
            match stat_follow(&child.access) {
                Ok(status) => {
                    let kind = status.kind();
                    if kind.is_dir() {
                        followed = Some(status.into_identity());
                    }
                    kind
                }
                Err(error) => {
                    debug_log!(Stat, 1, "dangling link {}: {}", child.display, error);
                    EntryKind::SymbolicLink
                }
            }
        } else {
            entry.kind()
        };
        let is_dir = resolved.is_dir();

        if self.options.reports(is_dir) {
            self.stats.entries_processed += 1;
            let event = WalkEvent::Entry {
                path: &child.display,
                entry,
                resolved,
                depth,
            };
            let flow = self.deliver(&event);
            if flow != Flow::Continue {
                return flow;
            }
        } else {
            debug_log!(Walk, 3, "filtered {}", child.display);
        }

        if !is_dir || !self.options.allows_descent_from(depth) {
            return Flow::Continue;
        }

        if self.options.visit_once {
            let identity = match followed {
                Some(identity) => identity,
                None => match stat_follow(&child.access) {
                    Ok(status) => status.into_identity(),
                    Err(source) => {
                        return self.entry_failed(&WalkError::status(&child.display, source));
                    }
                },
            };
            if !self.visited.insert(identity) {
                debug_log!(Dup, 1, "skipping already visited {}", child.display);
                info_log!(Skip, 1, "skipping already visited directory {}", child.display);
                return Flow::Continue;
            }
        }

        match self.descend(&child, depth, &parent.access) {
            flow @ (Flow::Aborted | Flow::Stranded) => flow,
            // A failed child has already been counted where it failed.
            Flow::Continue | Flow::Failed => Flow::Continue,
        }
    }

    /// Hands `event` to the visitor and applies its verdict.
    fn deliver(&mut self, event: &WalkEvent<'_>) -> Flow {
        match self.visitor.visit(event) {
            VisitOutcome::Continue => Flow::Continue,
            VisitOutcome::Abort => {
                debug_log!(Walk, 1, "visitor aborted at {}", event.path());
                Flow::Aborted
            }
            VisitOutcome::Error => {
                let error = WalkError::Visitor {
                    path: event.path().to_owned(),
                };
                if self.tolerate(&error) {
                    Flow::Continue
                } else {
                    Flow::Failed
                }
            }
        }
    }

    /// Counts an error that concerns a single entry.
    fn entry_failed(&mut self, error: &WalkError) -> Flow {
        if self.tolerate(error) {
            Flow::Continue
        } else {
            Flow::Failed
        }
    }

    /// Handles a directory that could not be entered.
    ///
    /// With errors ignored the directory is skipped without being counted.
    fn open_failed(&mut self, error: WalkError) -> Flow {
        if self.options.ignore_errors {
            info_log!(Skip, 1, "skipping {}", error);
            if !self.options.quiet {
                tracing::warn!(path = error.path(), "{error}");
                self.visitor.on_error(&error);
            }
            return Flow::Continue;
        }
        self.stats.errors_encountered += 1;
        self.visitor.on_error(&error);
        Flow::Failed
    }

    /// Counts `error` and reports whether the walk may carry on past it.
    fn tolerate(&mut self, error: &WalkError) -> bool {
        self.stats.errors_encountered += 1;
        if !self.options.ignore_errors {
            self.visitor.on_error(error);
            return false;
        }
        if !self.options.quiet {
            tracing::warn!(path = error.path(), "{error}");
            self.visitor.on_error(error);
        }
        true
    }
}

/// Builds the paths of `entry` inside `parent`.
///
/// The raw name is a single component, so appending it to the normalized
/// access path keeps that path normalized.
fn child_location(parent: &Location, entry: &DirEntry) -> Result<Location, WalkError> {
    let name = entry.display_name();
    let display = join_and_normalize(Some(parent.display.as_str()), Some(&*name))
        .map_err(|source| WalkError::invalid_path(&name, source))?
        .ok_or_else(|| WalkError::invalid_path(&name, pathname::PathError::Empty))?;
    Ok(Location {
        display,
        access: parent.access.join(entry.name()),
    })
}

/// The logical working directory only holds UTF-8 paths.
fn utf8(path: &Path) -> Result<&str, PlatformError> {
    path.to_str().ok_or_else(|| PlatformError::NonUtf8 {
        path: path.to_path_buf(),
    })
}

/// Reports errors against the display path rather than the access path.
fn rename(error: WalkError, display: &str) -> WalkError {
    match error {
        WalkError::OpenDir { source, .. } => WalkError::open_dir(display, source),
        WalkError::ReadEntry { source, .. } => WalkError::read_entry(display, source),
        other => other,
    }
}
