use thiserror::Error;

use crate::paths::ShownPath;

/// Everything that can go wrong while finding a config.
///
/// Paths in messages are shown relative to the finder's working directory.
/// Not finding any config is not an error; [`Finder::find`](crate::Finder::find)
/// returns `Ok(None)` for that.
#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum FindError {
    #[error("Failed to load the deploy config at {path}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(findfig::deploy_config::parse),
            help("the deploy config must be a JSON object")
        )
    )]
    Parse {
        path: ShownPath,
        source: serde_json::Error,
    },

    #[error(
        "A redirect config was found at \"{path}\".\n\
         But this is not valid - the required \"configPath\" property was not found.\n\
         Instead this file contains:\n\
         ```\n\
         {contents}\n\
         ```"
    )]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(findfig::deploy_config::invalid),
            help("add a \"configPath\" string pointing at the config to use")
        )
    )]
    Validation { path: ShownPath, contents: String },

    #[error(
        "There is a redirect configuration at \"{path}\".\n\
         But the config path it points to, \"{target}\", does not exist."
    )]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(findfig::deploy_config::missing_target),
            help("\"configPath\" is resolved relative to the deploy config's directory")
        )
    )]
    MissingTarget { path: ShownPath, target: ShownPath },

    #[error(
        "Found both a user config file at \"{user_config}\"\n\
         and a redirect config file at \"{deploy_config}\".\n\
         But these do not share the same base path so it is not clear which should be used."
    )]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(findfig::ambiguous),
            help("move the user config next to the deploy config's project, or remove the stale deploy config")
        )
    )]
    Ambiguous {
        user_config: ShownPath,
        deploy_config: ShownPath,
    },

    #[error("Failed to read {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(findfig::io)))]
    Io {
        path: ShownPath,
        source: std::io::Error,
    },

    #[error("Failed to determine the current working directory: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(findfig::working_dir)))]
    WorkingDir(#[source] std::io::Error),

    #[error("Invalid finder settings: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(findfig::settings)))]
    InvalidSettings(String),

    #[error("Failed to load finder settings: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(findfig::settings)))]
    Settings(#[from] confique::Error),
}
