//! crates/pathname/src/join.rs
//! Combination of two path fragments with `cd base; cd addition` semantics.

use crate::error::PathError;
use crate::normalize::normalize_with;
use crate::style::{PathStyle, split_drive_with};

/// Joins two fragments using the host [`PathStyle`].
#[must_use]
pub fn join(base: Option<&str>, addition: Option<&str>) -> Option<String> {
    join_with(base, addition, PathStyle::native())
}

/// Joins two fragments under an explicit [`PathStyle`].
///
/// The result matches `cd base; cd addition`:
///
/// - an absolute `addition` replaces `base`, inheriting `base`'s drive token
///   when `addition` has none;
/// - a relative `addition` is appended after exactly one separator;
/// - when either side is absent the other is returned verbatim.
///
/// The output is not normalized; see [`join_and_normalize_with`].
///
/// ```
/// use pathname::{join_with, PathStyle};
///
/// let posix = PathStyle::Posix;
/// assert_eq!(join_with(Some("/x/y"), Some("/z"), posix).as_deref(), Some("/z"));
/// assert_eq!(join_with(Some("/x/y/"), Some("z"), posix).as_deref(), Some("/x/y/z"));
/// assert_eq!(join_with(None, Some("z"), posix).as_deref(), Some("z"));
///
/// let windows = PathStyle::Windows;
/// assert_eq!(join_with(Some("D:\\x"), Some("\\z"), windows).as_deref(), Some("D:\\z"));
/// ```
#[must_use]
pub fn join_with(base: Option<&str>, addition: Option<&str>, style: PathStyle) -> Option<String> {
    let (base, addition) = match (base, addition) {
        (None, None) => return None,
        (Some(base), None) => return Some(base.to_owned()),
        (None, Some(addition)) => return Some(addition.to_owned()),
        (Some(base), Some(addition)) => (base, addition),
    };

    if addition.is_empty() {
        return Some(base.to_owned());
    }
    if base.is_empty() {
        return Some(addition.to_owned());
    }

    let (base_drive, _) = split_drive_with(base, style);
    let (add_drive, add_rest) = split_drive_with(addition, style);
    let add_absolute = add_rest.chars().next().is_some_and(|c| style.is_separator(c));

    if add_absolute {
        return Some(match (add_drive, base_drive) {
            (None, Some(drive)) => {
                let mut out = String::with_capacity(drive.len() + addition.len());
                out.push_str(drive);
                out.push_str(addition);
                out
            }
            _ => addition.to_owned(),
        });
    }

    // A drive-relative addition on another drive cannot be resolved lexically.
    if let Some(drive) = add_drive
        && !base_drive.is_some_and(|base_drive| base_drive.eq_ignore_ascii_case(drive))
    {
        return Some(addition.to_owned());
    }

    let mut out = String::with_capacity(base.len() + 1 + add_rest.len());
    out.push_str(base);
    let base_ends_with_separator = base.chars().next_back().is_some_and(|c| style.is_separator(c));
    let base_is_bare_drive = base_drive.is_some_and(|drive| drive.len() == base.len());
    if !base_ends_with_separator && !base_is_bare_drive {
        out.push(style.separator());
    }
    out.push_str(add_rest);
    Some(out)
}

/// Joins two fragments and normalizes the result using the host style.
pub fn join_and_normalize(
    base: Option<&str>,
    addition: Option<&str>,
) -> Result<Option<String>, PathError> {
    join_and_normalize_with(base, addition, PathStyle::native())
}

/// Joins two fragments and normalizes the result under `style`.
///
/// Returns `Ok(None)` only when both sides are absent.
pub fn join_and_normalize_with(
    base: Option<&str>,
    addition: Option<&str>,
    style: PathStyle,
) -> Result<Option<String>, PathError> {
    join_with(base, addition, style)
        .map(|joined| normalize_with(&joined, style))
        .transpose()
}
