//! Error handling for the template binaries.
//!
//! The library functions are total, so the only runtime failure left is a
//! terminal write going wrong. It still flows through a structured error
//! with an exit-code mapping rather than a panic, so a project grown from
//! this template has the seam already in place.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors the template binaries can hit.
#[derive(Debug, Error)]
pub enum CliError {
    /// An I/O operation failed (in practice: writing to the terminal).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Exit code to pass to the OS.
    ///
    /// | Variant | Code |
    /// |---------|------|
    /// | Io      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { .. } => 1,
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        tracing::error!("Internal error: {}", self);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
