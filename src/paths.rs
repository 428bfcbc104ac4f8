//! Lexical path helpers.
//!
//! Nothing here touches the filesystem. Paths are normalized by collapsing
//! `.` and `..` components the way `path.resolve` does in most tooling, so a
//! start directory like `./foo/../bar` and a redirect like `../../dist/x.json`
//! both land on predictable absolute paths without following symlinks.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make `path` absolute against `cwd` and normalize it.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Render `path` relative to `base`, climbing with `..` where needed.
///
/// Both paths are expected to be absolute and normalized. When no relative
/// form exists `path` is returned unchanged. A path equal to `base` renders
/// as the empty path.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// An absolute path paired with the form shown to operators.
///
/// Error messages and the redirect notice print paths relative to the working
/// directory; callers that need to act on a path use [`absolute`](Self::absolute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownPath {
    absolute: PathBuf,
    shown: PathBuf,
}

impl ShownPath {
    pub fn new(absolute: PathBuf, cwd: &Path) -> Self {
        let shown = relative_to(&absolute, cwd);
        Self { absolute, shown }
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    pub fn shown(&self) -> &Path {
        &self.shown
    }

    pub fn into_absolute(self) -> PathBuf {
        self.absolute
    }
}

impl fmt::Display for ShownPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shown.display())
    }
}
