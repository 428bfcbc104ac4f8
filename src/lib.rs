//! Find the config file that governs a CLI invocation, optionally following
//! a deploy config redirect to a generated config.
//!
//! ```ignore
//! let path = findfig::find_config(".", FindOptions::with_redirect())?;
//! ```
//!
//! That call walks up from the current directory looking for
//! `wrangler.jsonc`, `wrangler.json` or `wrangler.toml`, and also for a
//! `.wrangler/deploy/config.json` written by a build step. If the deploy
//! config belongs to the same project it wins, and a notice is printed to
//! stderr so the operator knows which file is in effect.
//!
//! # Discovery
//!
//! The search starts in the given directory and moves up one parent at a
//! time until the filesystem root. In each directory the candidate names are
//! tried in preference order. **Nearness dominates preference**: a
//! `wrangler.toml` in `packages/api/` beats a `wrangler.jsonc` at the repo
//! root when searching from `packages/api/`. This keeps monorepos predictable
//! no matter how deep inside a package a command is run.
//!
//! The candidate list is plain data. Replace it with
//! [`candidates()`](FinderBuilder::candidates) or extend it with
//! [`add_candidate()`](FinderBuilder::add_candidate).
//!
//! # Redirects
//!
//! With [`FindOptions::use_redirect`] set, a second ascending search looks for
//! the deploy config. It is a JSON object:
//!
//! ```json
//! { "configPath": "../../dist/wrangler.json" }
//! ```
//!
//! `configPath` is relative to the deploy config's own directory and must
//! point at an existing file. The deploy config's **base directory** is the
//! directory holding `.wrangler/`. Reconciliation then goes:
//!
//! | Deploy config | User config             | Result                     |
//! |---------------|-------------------------|----------------------------|
//! | absent        | any                     | user config, or `None`     |
//! | present       | absent                  | redirect target + notice   |
//! | present       | in the base directory   | redirect target + notice   |
//! | present       | somewhere else          | [`FindError::Ambiguous`]   |
//!
//! The last row stops a redirect written for one package from silently
//! applying to a sibling package that merely shares an ancestor directory.
//!
//! # Errors
//!
//! Every failure is a [`FindError`] variant, so callers can match on the kind
//! instead of parsing messages. Messages show paths relative to the working
//! directory and are meant to be printed verbatim. Finding nothing at all is
//! `Ok(None)`, leaving the fallback to the caller.
//!
//! # Testing without a disk
//!
//! The finder reads through the [`FileSystem`] trait. [`MemoryFileSystem`]
//! plus an explicit [`cwd()`](FinderBuilder::cwd) make lookups hermetic, and a
//! custom [`Reporter`] captures the redirect notice.

pub mod error;
pub mod fs;
pub mod paths;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod reconcile;
mod redirect;
mod report;
mod search;
mod settings;

#[cfg(test)]
mod fixtures;

use std::path::{Path, PathBuf};

pub use builder::{Finder, FinderBuilder};
#[cfg(feature = "clap")]
pub use cli::FindArgs;
pub use error::FindError;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use reconcile::RedirectState;
pub use redirect::{Redirect, RedirectDescriptor};
pub use report::{RedirectNotice, Reporter, SilentReporter, StderrReporter};
pub use search::find_up;
pub use settings::FinderSettings;
pub use types::{FindOptions, FoundFile};

/// Find the config for `start_dir` using the defaults: real filesystem,
/// process working directory, Wrangler file names, notices on stderr.
pub fn find_config(
    start_dir: impl AsRef<Path>,
    options: FindOptions,
) -> Result<Option<PathBuf>, FindError> {
    Finder::builder().build()?.find(start_dir, options)
}
