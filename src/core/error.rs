//! Error types for git-pep8-hook.
//!
//! This module defines all errors that can occur during a hook run.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in git-pep8-hook.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Git errors
    // =========================================================================
    /// Not in a Git repository.
    #[error("Not in a Git repository")]
    NotGitRepo,

    /// Git operation failed.
    #[error("Git operation failed: {operation} - {message}")]
    GitOperation {
        /// Name of the operation that failed.
        operation: String,
        /// Error message.
        message: String,
    },

    // =========================================================================
    // Subprocess errors
    // =========================================================================
    /// An external program could not be started. Fatal for the whole run.
    #[error("Failed to launch '{command}': {source}. Is it installed and on your PATH?")]
    Launch {
        /// The program that could not be started.
        command: String,
        /// Source error from the spawn attempt.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // File errors
    // =========================================================================
    /// A staged file vanished before it could be classified.
    /// Recovered per file: the caller skips it with a notice.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that no longer exists.
        path: PathBuf,
    },

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Failed to parse the override configuration file.
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Description of the parse error.
        message: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    ConfigInvalid {
        /// Field name that is invalid.
        field: String,
        /// Description of why it's invalid.
        message: String,
    },

    // =========================================================================
    // I/O errors
    // =========================================================================
    /// File I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what failed.
        message: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Internal errors
    // =========================================================================
    /// Internal error (should never happen).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates a new I/O error with context.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Creates a new Git operation error.
    pub fn git(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitOperation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a new launch failure for an external program.
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Creates a new configuration parse error.
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Returns true if this error is recovered per file rather than
    /// aborting the whole run.
    #[must_use]
    pub const fn is_skippable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
