//! Configuration management

use crate::error::{MoodError, Result};
use std::path::PathBuf;

/// Environment variable naming the storage directory
pub const DIR_ENV: &str = "MOODLOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `<name>_journal.json` and exports
    pub dir: PathBuf,
}

impl Config {
    /// Resolve the storage directory.
    /// An explicit path wins, then MOODLOG_DIR, then the current directory.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        let dir = match dir {
            Some(dir) => dir,
            None => match std::env::var_os(DIR_ENV) {
                Some(value) if !value.is_empty() => PathBuf::from(value),
                _ => std::env::current_dir()?,
            },
        };

        let config = Config { dir };
        config.validate()?;
        Ok(config)
    }

    /// Reject a storage path that exists but isn't a directory
    pub fn validate(&self) -> Result<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(MoodError::Config(format!(
                "Storage path '{}' is not a directory",
                self.dir.display()
            )));
        }
        Ok(())
    }
}
