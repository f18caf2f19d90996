//! Error types for projdesk-cli

use std::path::PathBuf;

use projdesk_core::ProjectId;
use thiserror::Error;

/// Result type alias for projdesk-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in projdesk-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from projdesk-core
    #[error(transparent)]
    Core(#[from] projdesk_core::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The project is not in the list the signed-in user can see.
    #[error("Project {0} is not in the project list")]
    ProjectNotListed(ProjectId),

    /// A page action completed without succeeding; the notification already
    /// told the user why.
    #[error("{0} failed")]
    ActionFailed(&'static str),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
