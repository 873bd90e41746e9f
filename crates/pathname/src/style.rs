//! crates/pathname/src/style.rs
//! Separator and drive-token rules.

/// Lexical rules used when splitting and assembling paths.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathStyle {
    /// `/` is the only separator and there is no drive token.
    Posix,
    /// Both `\` and `/` separate segments, `\` is emitted, and a leading
    /// `X:` is a drive token.
    Windows,
}

impl PathStyle {
    /// Returns the style of the host operating system.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Separator emitted when assembling paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Reports whether `c` separates segments in this style.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

/// Splits a leading drive token (`C:`) from `path`.
///
/// Posix paths never carry a drive token, so the whole input is returned as
/// the remainder.
///
/// ```
/// use pathname::{split_drive_with, PathStyle};
///
/// assert_eq!(split_drive_with("C:\\tmp", PathStyle::Windows), (Some("C:"), "\\tmp"));
/// assert_eq!(split_drive_with("C:\\tmp", PathStyle::Posix), (None, "C:\\tmp"));
/// ```
#[must_use]
pub fn split_drive_with(path: &str, style: PathStyle) -> (Option<&str>, &str) {
    if style == PathStyle::Windows {
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return (Some(&path[..2]), &path[2..]);
        }
    }
    (None, path)
}

/// Reports whether `path` is absolute under `style`.
///
/// A drive-relative Windows path such as `C:foo` is not absolute.
#[must_use]
pub fn is_absolute_with(path: &str, style: PathStyle) -> bool {
    let (_, rest) = split_drive_with(path, style);
    rest.chars().next().is_some_and(|c| style.is_separator(c))
}

/// Reports whether `path` is absolute under the host style.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    is_absolute_with(path, PathStyle::native())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_accepts_both_separators() {
        assert!(PathStyle::Windows.is_separator('/'));
        assert!(PathStyle::Windows.is_separator('\\'));
        assert!(!PathStyle::Posix.is_separator('\\'));
    }

    #[test]
    fn drive_requires_letter_and_colon() {
        assert_eq!(split_drive_with("1:x", PathStyle::Windows), (None, "1:x"));
        assert_eq!(split_drive_with("c:", PathStyle::Windows), (Some("c:"), ""));
        assert_eq!(split_drive_with("c", PathStyle::Windows), (None, "c"));
    }

    #[test]
    fn drive_relative_path_is_not_absolute() {
        assert!(!is_absolute_with("C:foo", PathStyle::Windows));
        assert!(is_absolute_with("C:/foo", PathStyle::Windows));
        assert!(is_absolute_with("\\foo", PathStyle::Windows));
        assert!(!is_absolute_with("\\foo", PathStyle::Posix));
        assert!(is_absolute_with("/", PathStyle::Posix));
        assert!(!is_absolute_with("", PathStyle::Posix));
    }
}
