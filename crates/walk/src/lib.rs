#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` performs a depth-first traversal of a directory tree and reports
//! every directory and entry to a caller-supplied [`Visitor`]. The visitor
//! steers the walk by returning a [`VisitOutcome`] for each [`WalkEvent`].
//!
//! # Design
//!
//! - [`DirReader`] enumerates one directory and never yields `.` or `..`.
//!   Entries always carry a definite [`EntryKind`]; when the OS does not report
//!   one the reader asks for the entry's status without following links.
//! - [`walk`] drives the recursion, honouring [`WalkOptions`] for depth
//!   limits, kind filters, link following, and error tolerance. Counters are
//!   accumulated into a caller-owned [`WalkStatistics`].
//! - [`VisitedSet`] records the physical identity of every entered directory
//!   when [`WalkOptions::visit_once`] is set, which makes walks that follow
//!   links terminate even when a link points at an ancestor.
//! - With [`WalkOptions::change_directory`] the process working directory
//!   tracks the directory being enumerated through a [`LogicalCwd`], and is
//!   restored on every exit path, including aborts. Event paths are then
//!   absolute, so visitors can open them directly.
//! - Entry names are raw OS strings ([`DirEntry::name`]); display paths
//!   replace invalid UTF-8, while the walker itself always opens the exact
//!   name.
//!
//! # Invariants
//!
//! - Errors are counted once, where they occur. A directory level that fails
//!   does not make its parent fail, unless the working directory could not
//!   be changed back into the parent afterwards.
//! - After [`VisitOutcome::Abort`] no further event is delivered and every
//!   open directory is closed.
//! - A directory whose identity is already in the visited set is never
//!   entered again.
//!
//! # Examples
//!
//! ```
//! use walk::{walk, VisitOutcome, WalkEvent, WalkOptions, WalkOutcome, WalkStatistics};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! std::fs::create_dir_all(root.join("nested"))?;
//! std::fs::write(root.join("nested/more.txt"), b"data")?;
//! let root = root.to_str().ok_or("non UTF-8 temp dir")?;
//!
//! let mut seen = Vec::new();
//! let mut stats = WalkStatistics::new();
//! let outcome = walk(root, &WalkOptions::new(), &mut stats, &mut |event: &WalkEvent<'_>| {
//!     if let WalkEvent::Entry { path, .. } = event {
//!         seen.push(path.to_string());
//!     }
//!     VisitOutcome::Continue
//! })?;
//!
//! assert_eq!(outcome, WalkOutcome::Complete);
//! assert_eq!(stats.directories_visited, 2);
//! assert!(seen.iter().any(|path| path.ends_with("more.txt")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod error;
mod options;
mod reader;
mod stats;
mod visited;
mod visitor;
mod walker;

pub use error::{WalkError, WalkErrorKind};
pub use options::WalkOptions;
pub use platform::{EntryKind, LogicalCwd};
pub use reader::{DirEntry, DirReader};
pub use stats::WalkStatistics;
pub use visited::VisitedSet;
pub use visitor::{VisitOutcome, Visitor, WalkEvent};
pub use walker::{WalkOutcome, walk, walk_with_visited};
