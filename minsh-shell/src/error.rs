use std::path::PathBuf;

use crate::config;

/// Represents an error encountered while running the interpreter's driver.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    /// An error occurred within the dispatch core.
    #[error("{0}")]
    CoreError(#[from] minsh_core::Error),

    /// A generic I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// An error occurred while reading input.
    #[error("input error occurred: {0}")]
    InputError(#[source] std::io::Error),

    /// A configuration file named on the command line could not be loaded.
    #[error("{}: {source}", path.display())]
    ConfigError {
        /// The file that was named.
        path: PathBuf,
        /// Why loading it failed.
        source: config::ConfigLoadError,
    },
}
