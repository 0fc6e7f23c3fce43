//! File system journal store

use crate::domain::{Entry, Journal};
use crate::error::{MoodError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result of reading a user's journal file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No journal file exists yet
    Fresh,
    /// Entries read from an existing journal file
    Restored(Vec<Entry>),
}

impl LoadOutcome {
    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            LoadOutcome::Fresh => Vec::new(),
            LoadOutcome::Restored(entries) => entries,
        }
    }
}

/// Abstract storage for journals
pub trait JournalStore {
    /// Read the persisted entries for `name`
    fn load(&self, name: &str) -> Result<LoadOutcome>;

    /// Overwrite the persisted entries for the journal's owner
    fn save(&self, journal: &Journal) -> Result<PathBuf>;

    /// Write a plain-text copy of the journal, returning its path
    fn export_text(&self, journal: &Journal) -> Result<PathBuf>;
}

/// Stores each journal as `<name>_journal.json` inside one directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    pub fn journal_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}_journal.json", name))
    }

    pub fn export_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}_journal_export.txt", name))
    }

    /// Replace `path` with `content` via a temp file in the same directory,
    /// so readers see either the old file or the complete new one.
    fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MoodError::unavailable(path, e))?;
        }

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| MoodError::unavailable(path, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| MoodError::unavailable(path, e))?;
        tmp.persist(path)
            .map_err(|e| MoodError::unavailable(path, e.error))?;

        Ok(())
    }
}

impl JournalStore for FileSystemStore {
    fn load(&self, name: &str) -> Result<LoadOutcome> {
        let path = self.journal_path(name);

        // read raw bytes so invalid UTF-8 surfaces as a parse error
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no journal file yet");
                return Ok(LoadOutcome::Fresh);
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "journal file unreadable");
                return Err(MoodError::unavailable(path, e));
            }
        };

        let entries: Vec<Entry> = serde_json::from_slice(&contents).map_err(|source| {
            debug!(path = %path.display(), error = %source, "journal file malformed");
            MoodError::StorageCorrupt {
                path: path.clone(),
                source,
            }
        })?;

        info!(path = %path.display(), entries = entries.len(), "journal loaded");
        Ok(LoadOutcome::Restored(entries))
    }

    fn save(&self, journal: &Journal) -> Result<PathBuf> {
        let path = self.journal_path(journal.name());
        let mut contents = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut contents,
            PrettyFormatter::with_indent(b"    "),
        );
        journal
            .entries()
            .serialize(&mut serializer)
            .map_err(|e| MoodError::unavailable(&path, e.into()))?;

        Self::write_atomic(&path, &contents)?;

        info!(path = %path.display(), entries = journal.entries().len(), "journal saved");
        Ok(path)
    }

    fn export_text(&self, journal: &Journal) -> Result<PathBuf> {
        let path = self.export_path(journal.name());

        let mut contents = String::new();
        for entry in journal.entries() {
            contents.push_str(&entry.export_line());
            contents.push('\n');
        }

        Self::write_atomic(&path, contents.as_bytes())?;

        info!(path = %path.display(), entries = journal.entries().len(), "journal exported");
        Ok(path)
    }
}
