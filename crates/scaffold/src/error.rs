//! Error taxonomy
//!
//! One enum per failure family. Every variant names what the operator has to
//! look at: the field, the path, or the template.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Interactive input could not be read
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input closed while waiting for {field}")]
    UnexpectedEof { field: String },

    #[error("failed to read {field}: {source}")]
    Read {
        field: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write prompt: {0}")]
    Prompt(#[source] io::Error),
}

/// Collected configuration is not usable
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("project name must be a single directory name, got '{0}'")]
    InvalidProjectName(String),

    #[error("module name must not be empty")]
    EmptyModuleName,

    #[error("invalid Go version '{0}' (expected 1.<minor>[.<patch>], e.g. 1.21)")]
    InvalidRuntimeVersion(String),
}

/// A directory or file could not be created
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("directory already exists: {}", path.display())]
    RootAlreadyExists { path: PathBuf },

    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create file {}: {source}", path.display())]
    FileCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A template body could not be rendered
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{{{token}}}}} in template '{template}'")]
    UnknownPlaceholder { template: String, token: String },

    #[error("malformed template '{template}': {reason}")]
    ParseFailed { template: String, reason: String },
}

/// Any failure that aborts a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
