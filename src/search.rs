//! Ascending file search.
//!
//! Starting from a directory, each candidate name is checked in preference
//! order; if none exists the walk moves to the parent directory and tries
//! again, up to the filesystem root.
//!
//! Nearness always dominates preference. A `wrangler.toml` next to the start
//! directory beats a `wrangler.jsonc` one level up; preference order only
//! breaks ties inside a single directory.
//!
//! The walk is purely lexical (it follows `Path::parent`), so it terminates
//! at the root even when the start directory sits inside a symlink loop.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::types::FoundFile;

/// Find the nearest match for any of `candidates`, walking up from `start`.
///
/// `start` must already be absolute and normalized
/// (see [`paths::absolutize`](crate::paths::absolutize)). Candidates may be
/// nested relative paths like `.wrangler/deploy/config.json` but must not
/// contain `..`; [`FinderBuilder::build`](crate::FinderBuilder::build) rejects those.
pub fn find_up<P: AsRef<Path>>(
    fs: &dyn FileSystem,
    start: &Path,
    candidates: &[P],
) -> Option<FoundFile> {
    let mut dir = start;
    loop {
        if let Some(path) = first_in_dir(fs, dir, candidates) {
            tracing::debug!(path = %path.display(), "found config candidate");
            return Some(FoundFile {
                path,
                dir: dir.to_path_buf(),
            });
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                tracing::debug!(start = %start.display(), "reached filesystem root without a match");
                return None;
            }
        }
    }
}

/// Check one directory for the candidates, most preferred first.
fn first_in_dir<P: AsRef<Path>>(fs: &dyn FileSystem, dir: &Path, candidates: &[P]) -> Option<PathBuf> {
    candidates.iter().find_map(|name| {
        let path = dir.join(name);
        if fs.is_file(&path) {
            Some(path)
        } else {
            tracing::trace!(path = %path.display(), "no file");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MemoryFileSystem, OsFileSystem};
    use crate::types::{DEFAULT_CANDIDATES, DEFAULT_DEPLOY_CONFIG};
    use std::fs;
    use tempfile::TempDir;

    fn found(fs: &dyn FileSystem, start: &str) -> Option<PathBuf> {
        find_up(fs, Path::new(start), &DEFAULT_CANDIDATES).map(|f| f.path)
    }

    #[test]
    fn nearest_directory_wins_for_each_format() {
        for ext in ["toml", "json", "jsonc"] {
            let name = format!("wrangler.{ext}");
            let fs = MemoryFileSystem::new()
                .with_file(format!("/p/{name}"), "DUMMY")
                .with_file(format!("/p/foo/{name}"), "DUMMY")
                .with_file(format!("/p/foo/bar/{name}"), "DUMMY")
                .with_file("/p/foo/bar/qux/holder.txt", "DUMMY");

            assert_eq!(found(&fs, "/p"), Some(PathBuf::from(format!("/p/{name}"))));
            assert_eq!(
                found(&fs, "/p/foo"),
                Some(PathBuf::from(format!("/p/foo/{name}")))
            );
            assert_eq!(
                found(&fs, "/p/foo/bar"),
                Some(PathBuf::from(format!("/p/foo/bar/{name}")))
            );
            assert_eq!(
                found(&fs, "/p/foo/bar/qux"),
                Some(PathBuf::from(format!("/p/foo/bar/{name}")))
            );
        }
    }

    #[test]
    fn preference_breaks_ties_in_same_directory() {
        let pairs = [
            ("jsonc", "json"),
            ("jsonc", "toml"),
            ("json", "toml"),
        ];
        for (preferred, other) in pairs {
            // Insertion order must not matter.
            let fs = MemoryFileSystem::new()
                .with_file(format!("/p/wrangler.{other}"), "DUMMY")
                .with_file(format!("/p/wrangler.{preferred}"), "DUMMY");
            assert_eq!(
                found(&fs, "/p"),
                Some(PathBuf::from(format!("/p/wrangler.{preferred}")))
            );
        }
    }

    #[test]
    fn nearness_beats_preference_across_directories() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/wrangler.jsonc", "DUMMY")
            .with_file("/p/foo/wrangler.toml", "DUMMY");
        assert_eq!(
            found(&fs, "/p/foo"),
            Some(PathBuf::from("/p/foo/wrangler.toml"))
        );
    }

    #[test]
    fn returns_none_at_root() {
        let fs = MemoryFileSystem::new().with_file("/p/other.txt", "");
        assert_eq!(found(&fs, "/p/a/b"), None);
    }

    #[test]
    fn found_dir_for_nested_candidate_is_project_dir() {
        let fs = MemoryFileSystem::new().with_file("/p/.wrangler/deploy/config.json", "{}");
        let hit = find_up(&fs, Path::new("/p/foo"), &[DEFAULT_DEPLOY_CONFIG]).unwrap();
        assert_eq!(hit.path, PathBuf::from("/p/.wrangler/deploy/config.json"));
        assert_eq!(hit.dir, PathBuf::from("/p"));
    }

    #[test]
    fn directories_named_like_candidates_are_skipped() {
        let root = TempDir::new().unwrap();
        let sub = root.path().join("sub");
        fs::create_dir_all(sub.join("wrangler.jsonc")).unwrap();
        fs::write(root.path().join("wrangler.toml"), "DUMMY").unwrap();

        let hit = find_up(&OsFileSystem, &sub, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(hit.path, root.path().join("wrangler.toml"));
        assert_eq!(hit.dir, root.path());
    }

    #[test]
    fn real_filesystem_walk_finds_mid_level() {
        let root = TempDir::new().unwrap();
        let mid = root.path().join("mid");
        let deep = mid.join("deep");
        fs::create_dir_all(&deep).unwrap();
        fs::write(mid.join("wrangler.json"), "{}").unwrap();
        fs::write(root.path().join("wrangler.jsonc"), "{}").unwrap();

        let hit = find_up(&OsFileSystem, &deep, &DEFAULT_CANDIDATES).unwrap();
        assert_eq!(hit.path, mid.join("wrangler.json"));
    }
}
