//! moodlog - Console mood journal
//!
//! Records short text entries per user, classifies each entry's mood by
//! keyword matching, and reports simple statistics over the journal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MoodError;
