//! Journal aggregate root

use crate::domain::Mood;
use crate::error::{MoodError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single dated journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    date: NaiveDate,
    text: String,
    mood: Mood,
}

impl Entry {
    pub fn new(date: NaiveDate, text: impl Into<String>, mood: Mood) -> Self {
        Entry {
            date,
            text: text.into(),
            mood,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Line shown in the mood history: `date: mood - text`
    pub fn history_line(&self) -> String {
        format!("{}: {} - {}", self.date.format("%Y-%m-%d"), self.mood, self.text)
    }

    /// Line written to the text export: `date - mood - text`
    pub fn export_line(&self) -> String {
        format!("{} - {} - {}", self.date.format("%Y-%m-%d"), self.mood, self.text)
    }
}

/// Trim `name` and check it can key a journal file in the storage directory
pub fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MoodError::EmptyInput("Name".to_string()));
    }
    if name.contains(['/', '\\']) {
        return Err(MoodError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// One user's ordered entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    name: String,
    entries: Vec<Entry>,
}

impl Journal {
    /// Create an empty journal for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Journal {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Append an entry dated today (local time)
    pub fn add_entry(&mut self, text: impl Into<String>, mood: Mood) -> &Entry {
        self.add_entry_on(Local::now().date_naive(), text, mood)
    }

    /// Append an entry with an explicit date
    pub fn add_entry_on(&mut self, date: NaiveDate, text: impl Into<String>, mood: Mood) -> &Entry {
        self.entries.push(Entry::new(date, text, mood));
        &self.entries[self.entries.len() - 1]
    }

    /// Replace all entries with previously persisted ones
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }
}
