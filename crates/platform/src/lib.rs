#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `platform` isolates the host-specific primitives the treewalk walker is
//! built on:
//!
//! - [`RawDirStream`] enumerates a directory and reports the entry kind only
//!   when the OS supplies one, so callers can tell "unreported" apart from a
//!   real answer;
//! - [`stat_no_follow`] and [`stat_follow`] return an [`EntryKind`] together
//!   with an opaque [`DirIdentity`] used for cycle detection;
//! - [`LogicalCwd`] keeps a logical working directory consistent with the
//!   physical one across `..` steps taken after following a link.
//!
//! Paths are UTF-8 strings throughout, matching the `pathname` crate.

mod cwd;
mod dir_stream;
mod error;
mod kind;
mod status;

pub use cwd::LogicalCwd;
pub use dir_stream::{RawDirStream, RawEntry};
pub use error::{PlatformError, is_loop_error};
pub use kind::EntryKind;
pub use status::{DirIdentity, FileStatus, stat_follow, stat_no_follow};
