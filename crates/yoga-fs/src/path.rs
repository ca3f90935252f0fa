//! Lexically normalized paths
//!
//! Config values are joined onto the project root as strings, so every path
//! in the workspace goes through [`NormalizedPath`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An absolute or relative path with `/` separators and no redundant segments.
///
/// Normalization is purely lexical: separators are unified, `.` segments
/// and repeated separators are dropped and `..` segments pop the previous
/// segment. A trailing separator is kept (collapsed to one), so a directory
/// written as `./src/graphql/` stays recognisably a directory. The
/// filesystem is never consulted, so symlinks are not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Normalize `path`. Backslashes are treated as separators.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The path for `std::fs` calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Resolve `segment` against this path.
    ///
    /// Follows filesystem join semantics rather than string concatenation:
    /// `./` and `../` are resolved, and an absolute segment replaces the base.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        if self.inner.is_empty() || is_absolute_str(&segment) {
            return Self::new(segment);
        }
        Self {
            inner: clean(&format!("{}/{}", self.inner, segment)),
        }
    }

    /// Whether the path is rooted (`/...`, `//server/...` or `C:/...`).
    pub fn is_absolute(&self) -> bool {
        is_absolute_str(&self.inner)
    }

    /// Express this path relative to `base` as a `./`-prefixed string.
    ///
    /// Returns `None` when `base` is not an ancestor of (or equal to) this path.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<String> {
        if self == base {
            return Some(".".to_string());
        }
        let rest = if base.inner.ends_with('/') {
            self.inner.strip_prefix(base.inner.as_str())?
        } else {
            self.inner
                .strip_prefix(base.inner.as_str())?
                .strip_prefix('/')?
        };
        Some(format!("./{}", rest))
    }

    /// Containing directory, `None` at a root.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) if trimmed.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Extension of the final segment; dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn is_absolute_str(s: &str) -> bool {
    s.starts_with('/') || (has_drive_prefix(s) && s[2..].starts_with('/'))
}

/// Split off the root prefix (`//`, `/`, `C:/`, `C:` or nothing).
fn split_prefix(s: &str) -> (&str, &str) {
    if s.starts_with("//") && !s.starts_with("///") {
        s.split_at(2)
    } else if s.starts_with('/') {
        s.split_at(1)
    } else if has_drive_prefix(s) {
        if s[2..].starts_with('/') {
            s.split_at(3)
        } else {
            s.split_at(2)
        }
    } else {
        ("", s)
    }
}

fn clean(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    if unified.is_empty() {
        return unified;
    }

    let (prefix, rest) = split_prefix(&unified);
    let rooted = !prefix.is_empty();
    let mut segments: Vec<&str> = Vec::new();

    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` above a root stays at the root
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if prefix.is_empty() && joined.is_empty() {
        return ".".to_string();
    }
    let trailing = if !joined.is_empty() && unified.ends_with('/') {
        "/"
    } else {
        ""
    };
    format!("{}{}{}", prefix, joined, trailing)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}
