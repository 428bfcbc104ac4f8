//! Clap adapter for findfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`FindArgs`]
//! is a derive struct you flatten into your own parser to get the usual
//! start-directory and `--use-redirect` arguments; [`FindArgs::options`]
//! bridges to the clap-free core.

use std::path::PathBuf;

use clap::Args;

use crate::types::FindOptions;

/// Clap-derived arguments controlling config discovery.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     find: FindArgs,
/// }
/// ```
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Directory to start searching from.
    #[arg(long = "cwd", value_name = "DIR", default_value = ".")]
    pub start_dir: PathBuf,

    /// Follow a deploy config redirect (`.wrangler/deploy/config.json`) when one is found.
    #[arg(long)]
    pub use_redirect: bool,

    /// Load finder settings (candidate names, deploy config location) from a TOML file.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

impl FindArgs {
    /// Per-call options for [`Finder::find`](crate::Finder::find).
    pub fn options(&self) -> FindOptions {
        FindOptions {
            use_redirect: self.use_redirect,
        }
    }
}
