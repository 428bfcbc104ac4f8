//! Deploy config loading.
//!
//! A deploy config is a small JSON file a build step writes under the
//! project's hidden state directory (`.wrangler/deploy/config.json` by
//! default) to point the tool at a generated config:
//!
//! ```json
//! { "configPath": "../../dist/wrangler.json" }
//! ```
//!
//! `configPath` is resolved against the deploy config's own directory and
//! must name an existing file. The project the redirect belongs to (its base
//! directory) is the directory that holds the hidden state directory, never
//! the directory of the target.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::FindError;
use crate::fs::FileSystem;
use crate::paths::{ShownPath, normalize};
use crate::types::FoundFile;

/// The on-disk shape of a deploy config. Other properties are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectDescriptor {
    #[serde(rename = "configPath")]
    pub config_path: String,
}

/// A validated redirect, ready to be reconciled with the user config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Absolute path of the deploy config file.
    pub deploy_config: PathBuf,
    /// Absolute path of the config it points to. Known to exist.
    pub target: PathBuf,
    /// The project directory the deploy config belongs to.
    pub base_dir: PathBuf,
}

/// Read, parse and validate the deploy config found by an ascending search.
///
/// `cwd` is only used to render paths in error messages.
pub fn load_redirect(
    fs: &dyn FileSystem,
    found: &FoundFile,
    cwd: &Path,
) -> Result<Redirect, FindError> {
    let shown = || ShownPath::new(found.path.clone(), cwd);

    let contents = fs
        .read_to_string(&found.path)
        .map_err(|source| FindError::Io {
            path: shown(),
            source,
        })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| FindError::Parse {
        path: shown(),
        source,
    })?;

    let descriptor = parse_descriptor(&value).ok_or_else(|| FindError::Validation {
        path: shown(),
        contents: pretty(&value),
    })?;

    let descriptor_dir = found.path.parent().unwrap_or(found.dir.as_path());
    let target = normalize(&descriptor_dir.join(&descriptor.config_path));
    if !fs.is_file(&target) {
        return Err(FindError::MissingTarget {
            path: shown(),
            target: ShownPath::new(target, cwd),
        });
    }

    tracing::debug!(
        deploy_config = %found.path.display(),
        target = %target.display(),
        "loaded deploy config"
    );

    Ok(Redirect {
        deploy_config: found.path.clone(),
        target,
        base_dir: found.dir.clone(),
    })
}

/// An empty `configPath` counts as missing.
fn parse_descriptor(value: &Value) -> Option<RedirectDescriptor> {
    RedirectDescriptor::deserialize(value)
        .ok()
        .filter(|d| !d.config_path.is_empty())
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
