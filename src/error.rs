//! Error handling for projgen.
//! Defines the crate error type and the result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating a project.
///
/// The variants fall into two groups. Setup errors (`ManifestError`,
/// `ProjectRootError`, `ValidationError`, `ConfigError`) abort a run and are returned
/// to the caller. Item errors (`SourceNotFound`, `CopyError`, `ReadError`,
/// `WriteError`, `TargetExists`) only ever skip one operation; the processor logs them
/// as warnings and collects them in its report.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template manifest could not be opened or read
    #[error("Cannot read template manifest '{path}': {source}.")]
    ManifestError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root directory of the generated project could not be created
    #[error("Cannot create project directory '{path}': {source}.")]
    ProjectRootError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur while loading an options file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in the creation options
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A template file or directory named by the manifest does not exist
    #[error("Template project data not exists: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("An error occurred during copy {} to {}: {source}", from.display(), to.display())]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An error occurred during reading file data in {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An error occurred during writing to project file in {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A copy would replace a file that already exists in the project
    #[error("Project file already exists, not overwritten: {}", path.display())]
    TargetExists { path: PathBuf },
}

impl Error {
    /// Whether the error only affects a single copy or filter operation.
    pub fn is_item_error(&self) -> bool {
        matches!(
            self,
            Error::SourceNotFound { .. }
                | Error::CopyError { .. }
                | Error::ReadError { .. }
                | Error::WriteError { .. }
                | Error::TargetExists { .. }
        )
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
