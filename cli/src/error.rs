//! Structured error types for the generator and the CLI.

use {std::path::PathBuf, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    #[error("template '{0}' not found\n\nRun 'pygen list' to see the available templates.")]
    UnknownTemplate(String),

    #[error("template '{0}' is already registered")]
    DuplicateTemplate(String),

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid file spec '{path}' in template '{template}': {reason}")]
    InvalidFileSpec {
        template: String,
        path: String,
        reason: String,
    },

    #[error("failed to render '{path}': {reason}")]
    Render { path: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid feature assignment '{0}' (expected NAME or NAME=true|false)")]
    InvalidFeature(String),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    JsonSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidProjectName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn render(path: &str, reason: impl Into<String>) -> Self {
        Error::Render {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
