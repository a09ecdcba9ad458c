//! projgen creates a new game project from a template directory.
//! A manifest lists the template files to copy; variable references such as
//! `${{ProgramName}}` are substituted in the manifest and in filtered files.

/// Command-line front end of the projgen binary
pub mod cli;

/// Generic command-line tokenizer
pub mod cmdline;

/// Options files (JSON or YAML)
pub mod config;

/// Common constants
pub mod constants;

/// Project creation, from options to a populated project directory
pub mod creator;

/// Error types and handling
pub mod error;

/// Variable substitution engine
pub mod filter;

/// Generated project identifiers
pub mod ids;

/// Logger initialization
pub mod logger;

/// Template manifest parsing into operation sets
pub mod manifest;

/// Creation options and environment settings
pub mod options;

/// Execution of manifest operations against the filesystem
pub mod processor;

/// Build-time variable table
pub mod variables;
