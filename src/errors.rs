use std::path::PathBuf;

use thiserror::Error;

use crate::config::remediation;

/// Errors that can occur while generating a component.
#[derive(Error, Debug)]
pub enum CgError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}\n{}", path.display(), remediation())]
    ConfigMissing { path: PathBuf },

    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    /// The template directory or one of its files could not be read.
    #[error("cannot read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination directory or file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template directory contains a subdirectory.
    #[error("nested template directories are not supported: {}", path.display())]
    NestedTemplate { path: PathBuf },

    /// The component name cannot be used as a directory name.
    #[error("invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The component name could not be read from the prompt.
    #[error("cannot read component name: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    /// A file that would be created already exists.
    #[error("already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
}

/// Convenience alias for `Result<T, CgError>`.
pub type Result<T> = std::result::Result<T, CgError>;
