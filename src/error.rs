//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("{0} cannot be empty.")]
    EmptyInput(String),

    #[error("Name '{0}' cannot contain path separators.")]
    InvalidName(String),

    #[error("Storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Journal file is corrupt: {}: {source}", .path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    NoData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoodError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MoodError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Informational errors are reported without the "Error" prefix
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            MoodError::NoData(_) | MoodError::EmptyInput(_) | MoodError::InvalidName(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodError::StorageUnavailable { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that {} is readable and writable\n\
                    • Choose another directory with --dir or MOODLOG_DIR",
                    self,
                    path.parent()
                        .filter(|p| !p.as_os_str().is_empty())
                        .unwrap_or_else(|| std::path::Path::new("."))
                        .display()
                )
            }
            MoodError::StorageCorrupt { path, .. } => {
                format!(
                    "{}\n\n\
                    Starting with an empty journal. Saving will overwrite {}.\n\
                    Move the file aside first if you want to keep it.",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;
