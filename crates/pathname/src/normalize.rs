//! crates/pathname/src/normalize.rs
//! Lexical reduction of a path to canonical form.

use crate::error::PathError;
use crate::style::{PathStyle, split_drive_with};

/// Normalizes `path` using the host [`PathStyle`].
pub fn normalize(path: &str) -> Result<String, PathError> {
    normalize_with(path, PathStyle::native())
}

/// Normalizes `path` under an explicit [`PathStyle`].
///
/// `.` segments are dropped and every `(segment, "..")` pair is cancelled
/// until none remain, so cascades such as `a/b/../../c` reduce to `c`. Leading
/// `..` segments survive on relative paths and are discarded on absolute ones
/// since nothing lies above the root. An empty relative result becomes `.`.
///
/// ```
/// use pathname::{normalize_with, PathStyle};
///
/// assert_eq!(normalize_with("a/b/../../c", PathStyle::Posix).unwrap(), "c");
/// assert_eq!(normalize_with("/../x//", PathStyle::Posix).unwrap(), "/x");
/// assert_eq!(normalize_with("./", PathStyle::Posix).unwrap(), ".");
/// ```
pub fn normalize_with(path: &str, style: PathStyle) -> Result<String, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let (drive, rest) = split_drive_with(path, style);
    let absolute = rest.chars().next().is_some_and(|c| style.is_separator(c));

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(|c| style.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let separator = style.separator();
    let mut out = String::with_capacity(path.len());
    if let Some(drive) = drive {
        out.push_str(drive);
    }
    if absolute {
        out.push(separator);
    } else if segments.is_empty() {
        out.push('.');
        return Ok(out);
    } else if drive.is_none() && split_drive_with(segments[0], style).0.is_some() {
        // A bare `X:` segment would read back as a drive token.
        out.push('.');
        out.push(separator);
    }

    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(segment);
    }
    Ok(out)
}
