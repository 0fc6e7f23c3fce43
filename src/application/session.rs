//! Journaling session use case
//!
//! A session is opened for one user name, serves any number of entry,
//! report and export operations, and ends with a consuming `finish` that
//! persists the journal. Once finished, the session value is gone, so no
//! further operation can run against it.

use crate::domain::{classify, recommend, report, validate_name, Journal, Mood};
use crate::error::{MoodError, Result};
use crate::infrastructure::{JournalStore, LoadOutcome};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info};

/// What happened when the session read the user's prior journal
#[derive(Debug)]
pub enum LoadNotice {
    /// No prior journal
    Fresh,
    /// Prior journal restored with this many entries
    Restored(usize),
    /// Prior journal could not be used; the session starts empty
    Failed(MoodError),
}

/// Result of adding an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub mood: Mood,
    pub suggestion: &'static str,
}

/// Service holding one user's journal for the lifetime of a session
pub struct Session<S: JournalStore> {
    store: S,
    journal: Journal,
}

impl<S: JournalStore> Session<S> {
    /// Start a session for `name`, loading any prior journal.
    ///
    /// Storage failures during load don't abort the session; they are handed
    /// back in the notice and the journal starts empty.
    pub fn open(store: S, name: &str) -> Result<(Self, LoadNotice)> {
        let name = validate_name(name)?;

        let mut journal = Journal::new(name);
        let notice = match store.load(name) {
            Ok(LoadOutcome::Fresh) => LoadNotice::Fresh,
            Ok(LoadOutcome::Restored(entries)) => {
                let count = entries.len();
                journal.replace_entries(entries);
                LoadNotice::Restored(count)
            }
            Err(e) => {
                info!(user = name, error = %e, "starting with an empty journal");
                LoadNotice::Failed(e)
            }
        };

        info!(user = name, entries = journal.entries().len(), "session opened");
        Ok((Session { store, journal }, notice))
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Classify `text`, record it as today's entry and suggest an activity
    pub fn add(&mut self, text: &str) -> Result<Added> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoodError::EmptyInput("Entry".to_string()));
        }

        let mood = classify(text);
        self.journal.add_entry(text, mood);
        debug!(%mood, entries = self.journal.entries().len(), "entry added");

        Ok(Added {
            mood,
            suggestion: recommend(mood),
        })
    }

    /// History lines in insertion order
    pub fn history(&self) -> Result<Vec<String>> {
        if self.journal.is_empty() {
            return Err(MoodError::NoData("No mood history found.".to_string()));
        }
        Ok(self
            .journal
            .entries()
            .iter()
            .map(|entry| entry.history_line())
            .collect())
    }

    pub fn most_common(&self) -> Result<(Mood, usize)> {
        report::most_common_mood(self.journal.entries())
            .ok_or_else(|| MoodError::NoData("No mood data available.".to_string()))
    }

    /// Suggestion for the most recent entry's mood
    pub fn recommend_last(&self) -> Result<&'static str> {
        self.journal
            .last()
            .map(|entry| recommend(entry.mood()))
            .ok_or_else(|| MoodError::NoData("No entries to analyze mood from.".to_string()))
    }

    /// Mood counts for the week ending on `today`
    pub fn weekly(&self, today: NaiveDate) -> Result<Vec<(Mood, usize)>> {
        let counts = report::weekly_summary(self.journal.entries(), today);
        if counts.is_empty() {
            return Err(MoodError::NoData(
                "No entries in the past 7 days.".to_string(),
            ));
        }
        Ok(counts)
    }

    pub fn export(&self) -> Result<PathBuf> {
        self.store.export_text(&self.journal)
    }

    /// Persist the journal and end the session
    pub fn finish(self) -> Result<PathBuf> {
        let path = self.store.save(&self.journal)?;
        info!(user = self.journal.name(), "session finished");
        Ok(path)
    }
}
