//! Finder settings as a confique struct.
//!
//! Tools embedding findfig usually hard-code their file names through
//! [`FinderBuilder`](crate::FinderBuilder). When the names or the deploy
//! config location should be adjustable without a rebuild, load them here
//! and hand the result to [`FinderBuilder::settings`](crate::FinderBuilder::settings).
//!
//! Layer precedence, highest first: environment variables, the optional TOML
//! file, compiled defaults.

use std::path::{Path, PathBuf};

use confique::Config;

use crate::error::FindError;
use crate::types::FindOptions;

#[derive(Config, Debug, Clone, PartialEq)]
pub struct FinderSettings {
    /// Config file names to look for, most preferred first.
    #[config(default = ["wrangler.jsonc", "wrangler.json", "wrangler.toml"])]
    pub candidates: Vec<String>,

    /// Location of the deploy config, relative to the project directory.
    #[config(default = ".wrangler/deploy/config.json", env = "FINDFIG_DEPLOY_CONFIG")]
    pub deploy_config: PathBuf,

    /// Name shown in the redirect notice.
    #[config(default = "Wrangler", env = "FINDFIG_TOOL_NAME")]
    pub tool_name: String,

    /// Follow deploy config redirects by default.
    #[config(default = false, env = "FINDFIG_USE_REDIRECT")]
    pub use_redirect: bool,
}

impl FinderSettings {
    /// Compiled defaults only.
    pub fn defaults() -> Result<Self, FindError> {
        Ok(Self::builder().load()?)
    }

    /// Defaults, overlaid by `file` (if given and present), overlaid by env vars.
    pub fn load(file: Option<&Path>) -> Result<Self, FindError> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Per-call options implied by these settings.
    pub fn options(&self) -> FindOptions {
        FindOptions {
            use_redirect: self.use_redirect,
        }
    }

    /// Commented TOML template listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
