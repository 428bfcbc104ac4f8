//! Where the redirect notice goes.

use std::fmt;

use crate::paths::ShownPath;
use crate::types::NO_USER_CONFIG;

/// Receives operator-facing warnings from the finder.
pub trait Reporter {
    fn warn(&self, message: &str);
}

/// Writes warnings to stderr with a `▲ [WARNING]` marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn warn(&self, message: &str) {
        eprintln!("▲ [WARNING] {message}\n");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn warn(&self, _message: &str) {}
}

/// The notice emitted whenever a deploy config redirect is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectNotice<'a> {
    pub tool_name: &'a str,
    pub redirected: &'a ShownPath,
    pub deploy_config: &'a ShownPath,
    pub original: Option<&'a ShownPath>,
}

impl fmt::Display for RedirectNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using redirected {} configuration.", self.tool_name)?;
        writeln!(f, "  Redirected config path: \"{}\"", self.redirected)?;
        writeln!(f, "  Deploy config path: \"{}\"", self.deploy_config)?;
        match self.original {
            Some(path) => write!(f, "  Original config path: \"{path}\""),
            None => write!(f, "  Original config path: \"{NO_USER_CONFIG}\""),
        }
    }
}
