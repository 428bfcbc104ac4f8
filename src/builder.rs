//! [`Finder`] and its builder: wires the ascending search, the deploy config
//! loader and the reconciler together over an injected filesystem, working
//! directory and reporter.

use std::path::{Component, Path, PathBuf};

use crate::error::FindError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::paths;
use crate::reconcile::{self, NoticeSink, RedirectState};
use crate::redirect;
use crate::report::{Reporter, StderrReporter};
use crate::search;
use crate::settings::FinderSettings;
use crate::types::{DEFAULT_CANDIDATES, DEFAULT_DEPLOY_CONFIG, DEFAULT_TOOL_NAME, FindOptions};

/// A configured config finder. Immutable; [`find`](Self::find) can be called
/// any number of times.
pub struct Finder {
    candidates: Vec<PathBuf>,
    deploy_config: PathBuf,
    tool_name: String,
    cwd: PathBuf,
    fs: Box<dyn FileSystem>,
    reporter: Box<dyn Reporter>,
}

impl Finder {
    pub fn builder() -> FinderBuilder {
        FinderBuilder::new()
    }

    /// Find the config governing an invocation started in `start_dir`.
    ///
    /// A relative `start_dir` is taken relative to the finder's working
    /// directory. Returns `Ok(None)` when neither a user config nor (with
    /// `use_redirect`) a deploy config exists anywhere up to the root.
    pub fn find(
        &self,
        start_dir: impl AsRef<Path>,
        options: FindOptions,
    ) -> Result<Option<PathBuf>, FindError> {
        let start = paths::absolutize(start_dir.as_ref(), &self.cwd);
        let fs = &*self.fs;

        let user_config = search::find_up(fs, &start, &self.candidates);

        let redirect = if options.use_redirect {
            match search::find_up(fs, &start, std::slice::from_ref(&self.deploy_config)) {
                Some(found) => RedirectState::Found(redirect::load_redirect(fs, &found, &self.cwd)?),
                None => RedirectState::NotFound,
            }
        } else {
            RedirectState::Disabled
        };

        tracing::debug!(
            start = %start.display(),
            user_config = ?user_config.as_ref().map(|f| &f.path),
            redirect = ?redirect,
            "reconciling config lookup"
        );

        let sink = NoticeSink {
            reporter: &*self.reporter,
            tool_name: &self.tool_name,
            cwd: &self.cwd,
        };
        reconcile::reconcile(user_config, redirect, &sink)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn deploy_config(&self) -> &Path {
        &self.deploy_config
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// Builder for a [`Finder`].
///
/// Every setting has a default matching Wrangler's conventions, so
/// `Finder::builder().build()` is ready to use against the real filesystem,
/// the process working directory and stderr.
pub struct FinderBuilder {
    candidates: Option<Vec<PathBuf>>,
    deploy_config: Option<PathBuf>,
    tool_name: Option<String>,
    cwd: Option<PathBuf>,
    fs: Box<dyn FileSystem>,
    reporter: Box<dyn Reporter>,
}

impl FinderBuilder {
    fn new() -> Self {
        Self {
            candidates: None,
            deploy_config: None,
            tool_name: None,
            cwd: None,
            fs: Box::new(OsFileSystem),
            reporter: Box::new(StderrReporter),
        }
    }

    /// Replace the candidate file names. Listed **most preferred first**.
    pub fn candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        self.candidates = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Append a candidate with the lowest preference.
    /// If none have been set yet, starts from the defaults.
    pub fn add_candidate(mut self, name: impl Into<PathBuf>) -> Self {
        self.candidates
            .get_or_insert_with(default_candidates)
            .push(name.into());
        self
    }

    /// Override where deploy configs live, relative to a project directory
    /// (default: `.wrangler/deploy/config.json`).
    pub fn deploy_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.deploy_config = Some(path.into());
        self
    }

    /// Override the tool name shown in the redirect notice (default: `Wrangler`).
    pub fn tool_name(mut self, name: &str) -> Self {
        self.tool_name = Some(name.to_string());
        self
    }

    /// Resolve relative start directories, and render paths in messages,
    /// against `dir` instead of the process working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Fill candidates, deploy config and tool name from loaded
    /// [`FinderSettings`]. Values set explicitly on the builder win, whether
    /// they were set before or after this call. `use_redirect` is per call;
    /// see [`FinderSettings::options`].
    pub fn settings(mut self, settings: FinderSettings) -> Self {
        self.candidates
            .get_or_insert_with(|| settings.candidates.into_iter().map(PathBuf::from).collect());
        self.deploy_config.get_or_insert(settings.deploy_config);
        self.tool_name.get_or_insert(settings.tool_name);
        self
    }

    fn effective_candidates(&self) -> Vec<PathBuf> {
        self.candidates.clone().unwrap_or_else(default_candidates)
    }

    fn effective_deploy_config(&self) -> PathBuf {
        self.deploy_config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPLOY_CONFIG))
    }

    fn effective_cwd(&self) -> Result<PathBuf, FindError> {
        let process_cwd = || std::env::current_dir().map_err(FindError::WorkingDir);
        match &self.cwd {
            Some(dir) if dir.is_absolute() => Ok(paths::normalize(dir)),
            Some(dir) => Ok(paths::absolutize(dir, &process_cwd()?)),
            None => process_cwd().map(|dir| paths::normalize(&dir)),
        }
    }

    pub fn build(self) -> Result<Finder, FindError> {
        let candidates = self.effective_candidates();
        if candidates.is_empty() {
            return Err(FindError::InvalidSettings(
                "at least one candidate file name is required".into(),
            ));
        }
        for name in &candidates {
            check_relative("candidate", name)?;
        }

        let deploy_config = self.effective_deploy_config();
        check_relative("deploy config path", &deploy_config)?;

        let cwd = self.effective_cwd()?;

        Ok(Finder {
            candidates,
            deploy_config,
            tool_name: self
                .tool_name
                .unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string()),
            cwd,
            fs: self.fs,
            reporter: self.reporter,
        })
    }
}

fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Candidates and the deploy config are looked up inside each directory of the
/// walk, so they must stay below it: relative, non-empty, no `..`.
fn check_relative(what: &str, path: &Path) -> Result<(), FindError> {
    let stays_below = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if path.as_os_str().is_empty() || path.is_absolute() || !stays_below {
        return Err(FindError::InvalidSettings(format!(
            "{what} must be a non-empty relative path without `..`, got {:?}",
            path.display().to_string()
        )));
    }
    Ok(())
}
