use std::path::PathBuf;

/// Config file names recognised by default, most preferred first.
///
/// Within a single directory `wrangler.jsonc` beats `wrangler.json`, which
/// beats `wrangler.toml`. Across directories the nearest one always wins.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["wrangler.jsonc", "wrangler.json", "wrangler.toml"];

/// Where a deploy config lives, relative to the project directory it redirects.
pub const DEFAULT_DEPLOY_CONFIG: &str = ".wrangler/deploy/config.json";

/// Tool name shown in the redirect notice.
pub const DEFAULT_TOOL_NAME: &str = "Wrangler";

/// Placeholder for the original config path when a redirect is applied
/// without any user config in sight.
pub const NO_USER_CONFIG: &str = "<no user config found>";

/// A file located by an ascending search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    /// Absolute, normalized path of the matched file.
    pub path: PathBuf,
    /// The directory the search was probing when it matched.
    ///
    /// For a plain file name this is the file's parent. For a nested
    /// candidate such as `.wrangler/deploy/config.json` it is the directory
    /// holding `.wrangler`, which is the project the file belongs to.
    pub dir: PathBuf,
}

/// Per-call options for [`Finder::find`](crate::Finder::find).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Look for a deploy config and follow it when found (default: `false`).
    pub use_redirect: bool,
}

impl FindOptions {
    /// Options with redirect support turned on.
    pub fn with_redirect() -> Self {
        Self { use_redirect: true }
    }
}
