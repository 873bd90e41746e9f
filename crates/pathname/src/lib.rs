#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `pathname` implements the purely lexical path handling used by the
//! treewalk directory walker. [`normalize`] reduces a path string to its
//! canonical form and [`join`] combines two fragments with the semantics of
//! `cd base; cd addition`. Neither function touches the filesystem, so symbolic
//! links are never resolved here.
//!
//! # Design
//!
//! - [`PathStyle`] captures the separator and drive-letter rules of the host.
//!   Every operation has a `*_with` variant taking an explicit style so both
//!   rule sets can be exercised on any platform.
//! - Results are always freshly allocated [`String`] values. Inputs are only
//!   borrowed and never aliased by the output.
//! - [`join_and_normalize`] is the variant the walker uses when synthesizing
//!   child paths so recursion never accumulates redundant segments.
//!
//! # Invariants
//!
//! After [`normalize`]:
//!
//! - no empty segments and no `.` segments remain;
//! - no `(X, "..")` pair remains unless `X` is itself `..`;
//! - absolute paths carry no leading `..` segments;
//! - a drive token (`C:` in Windows style) is preserved but never treated as a
//!   segment, and trailing separators are dropped.
//!
//! # Errors
//!
//! Only empty input is rejected ([`PathError::Empty`]). Malformed but
//! non-empty input is normalized best-effort.
//!
//! # Examples
//!
//! ```
//! use pathname::{join, join_and_normalize, normalize_with, PathStyle};
//!
//! assert_eq!(normalize_with("/a/b/../../c", PathStyle::Posix).unwrap(), "/c");
//! assert_eq!(normalize_with("a/../..", PathStyle::Posix).unwrap(), "..");
//! assert_eq!(
//!     normalize_with("C:/x/./y/..", PathStyle::Windows).unwrap(),
//!     "C:\\x"
//! );
//!
//! # #[cfg(unix)]
//! # {
//! assert_eq!(join(Some("/x/y"), Some("z")).as_deref(), Some("/x/y/z"));
//! assert_eq!(join_and_normalize(Some("/x/y"), Some("../z")).unwrap().as_deref(), Some("/x/z"));
//! # }
//! ```

mod error;
mod join;
mod normalize;
mod style;


pub use crate::error::PathError;
pub use crate::join::{join, join_and_normalize, join_and_normalize_with, join_with};
pub use crate::normalize::{normalize, normalize_with};
pub use crate::style::{PathStyle, is_absolute, is_absolute_with, split_drive_with};
