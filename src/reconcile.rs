//! Decide between the user config and a deploy config redirect.
//!
//! | Redirect              | User config | Result                                  |
//! |-----------------------|-------------|-----------------------------------------|
//! | disabled or not found | any         | user config path, or `None`             |
//! | found                 | none        | redirect target, notice                 |
//! | found                 | same base   | redirect target, notice                 |
//! | found                 | other base  | [`FindError::Ambiguous`]                |
//!
//! When both exist the redirect takes priority; the user config only serves
//! to confirm that the redirect belongs to the same project.

use std::path::{Path, PathBuf};

use crate::error::FindError;
use crate::paths::ShownPath;
use crate::redirect::Redirect;
use crate::report::{RedirectNotice, Reporter};
use crate::types::FoundFile;

/// Outcome of the redirect half of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    /// The caller did not ask for redirects; nothing was searched.
    Disabled,
    /// Redirects were requested but no deploy config is on the ascension path.
    NotFound,
    Found(Redirect),
}

/// Everything the reconciler needs to word its notice.
pub struct NoticeSink<'a> {
    pub reporter: &'a dyn Reporter,
    pub tool_name: &'a str,
    /// Paths are shown relative to this directory.
    pub cwd: &'a Path,
}

pub fn reconcile(
    user_config: Option<FoundFile>,
    redirect: RedirectState,
    sink: &NoticeSink<'_>,
) -> Result<Option<PathBuf>, FindError> {
    let redirect = match redirect {
        RedirectState::Disabled | RedirectState::NotFound => {
            return Ok(user_config.map(|found| found.path));
        }
        RedirectState::Found(redirect) => redirect,
    };

    let deploy_config = ShownPath::new(redirect.deploy_config, sink.cwd);
    let original = match user_config {
        None => None,
        Some(found) if found.dir == redirect.base_dir => Some(ShownPath::new(found.path, sink.cwd)),
        Some(found) => {
            tracing::debug!(
                user_config = %found.path.display(),
                base_dir = %redirect.base_dir.display(),
                "user config and deploy config belong to different projects"
            );
            return Err(FindError::Ambiguous {
                user_config: ShownPath::new(found.path, sink.cwd),
                deploy_config,
            });
        }
    };

    let redirected = ShownPath::new(redirect.target, sink.cwd);
    let notice = RedirectNotice {
        tool_name: sink.tool_name,
        redirected: &redirected,
        deploy_config: &deploy_config,
        original: original.as_ref(),
    };
    sink.reporter.warn(&notice.to_string());

    Ok(Some(redirected.into_absolute()))
}
