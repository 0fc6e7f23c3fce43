//! Interactive menu driving a session

use crate::application::{LoadNotice, Session};
use crate::cli::output;
use crate::domain::validate_name;
use crate::error::{MoodError, Result};
use crate::infrastructure::JournalStore;
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Numbered menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEntry,
    History,
    MostCommon,
    RecommendLast,
    WeeklySummary,
    Export,
    SaveAndExit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddEntry),
            "2" => Some(MenuChoice::History),
            "3" => Some(MenuChoice::MostCommon),
            "4" => Some(MenuChoice::RecommendLast),
            "5" => Some(MenuChoice::WeeklySummary),
            "6" => Some(MenuChoice::Export),
            "7" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

/// How the menu loop ended
#[derive(Debug)]
pub enum SessionEnd {
    /// Journal saved to this path
    Saved(PathBuf),
    /// Save was attempted and failed; the error was already shown
    SaveFailed(MoodError),
    /// Input closed before the user chose to save
    InputClosed,
}

/// Read one line, trimmed. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

fn report<W: Write>(out: &mut W, err: &MoodError) -> Result<()> {
    if err.is_informational() {
        writeln!(out, "{}", err)?;
    } else {
        writeln!(out, "Error: {}", err.display_with_suggestions())?;
    }
    Ok(())
}

/// Ask for the journal owner until a non-blank name is given
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    loop {
        match prompt(input, out, "Enter your name: ")? {
            None => return Ok(None),
            Some(name) => match validate_name(&name) {
                Ok(name) => return Ok(Some(name.to_string())),
                Err(e) => report(out, &e)?,
            },
        }
    }
}

/// Show what loading the prior journal did
pub fn show_load_notice<W: Write>(out: &mut W, notice: &LoadNotice) -> Result<()> {
    match notice {
        LoadNotice::Fresh => Ok(()),
        LoadNotice::Restored(_) => {
            writeln!(out, "Previous journal loaded.")?;
            Ok(())
        }
        LoadNotice::Failed(err) => report(out, err),
    }
}

/// Run the menu until the user saves or input ends.
///
/// Operation failures are written to `out` and the menu continues; only
/// console I/O errors are returned.
pub fn run_menu<S, R, W>(mut session: Session<S>, input: &mut R, out: &mut W) -> Result<SessionEnd>
where
    S: JournalStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "{}", output::MENU)?;

        let Some(line) = prompt(input, out, "Choose an option (1-7): ")? else {
            debug!("input closed, leaving without saving");
            writeln!(out)?;
            return Ok(SessionEnd::InputClosed);
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid choice. Try again.")?;
            continue;
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::AddEntry => {
                let Some(text) = prompt(input, out, "How do you feel today?\n")? else {
                    return Ok(SessionEnd::InputClosed);
                };
                match session.add(&text) {
                    Ok(added) => writeln!(out, "{}", output::format_added(&added))?,
                    Err(e) => report(out, &e)?,
                }
            }
            MenuChoice::History => match session.history() {
                Ok(lines) => write!(out, "{}", output::format_history(&lines))?,
                Err(e) => report(out, &e)?,
            },
            MenuChoice::MostCommon => match session.most_common() {
                Ok((mood, count)) => writeln!(out, "{}", output::format_most_common(mood, count))?,
                Err(e) => report(out, &e)?,
            },
            MenuChoice::RecommendLast => match session.recommend_last() {
                Ok(suggestion) => writeln!(out, "{}", suggestion)?,
                Err(e) => report(out, &e)?,
            },
            MenuChoice::WeeklySummary => match session.weekly(Local::now().date_naive()) {
                Ok(counts) => write!(out, "{}", output::format_weekly_summary(&counts))?,
                Err(e) => report(out, &e)?,
            },
            MenuChoice::Export => match session.export() {
                Ok(path) => writeln!(out, "Journal exported to '{}'", path.display())?,
                Err(e) => report(out, &e)?,
            },
            MenuChoice::SaveAndExit => {
                let end = match session.finish() {
                    Ok(path) => {
                        writeln!(out, "Journal saved successfully.")?;
                        SessionEnd::Saved(path)
                    }
                    Err(e) => {
                        report(out, &e)?;
                        SessionEnd::SaveFailed(e)
                    }
                };
                writeln!(out, "Goodbye and take care!")?;
                return Ok(end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemStore;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(dir: &std::path::Path, name: &str, script: &str) -> (SessionEnd, String) {
        let store = FileSystemStore::new(dir.to_path_buf());
        let (session, notice) = Session::open(store, name).unwrap();
        let mut out = Vec::new();
        show_load_notice(&mut out, &notice).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let end = run_menu(session, &mut input, &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddEntry));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_prompt_name_reprompts_on_blank() {
        let mut input = Cursor::new(b"\n   \nalice\n".to_vec());
        let mut out = Vec::new();
        let name = prompt_name(&mut input, &mut out).unwrap();
        assert_eq!(name.as_deref(), Some("alice"));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Name cannot be empty.").count(), 2);
    }

    #[test]
    fn test_prompt_name_rejects_path_separators() {
        let mut input = Cursor::new(b"../etc\nbob\n".to_vec());
        let mut out = Vec::new();
        let name = prompt_name(&mut input, &mut out).unwrap();
        assert_eq!(name.as_deref(), Some("bob"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name '../etc' cannot contain path separators."));
    }

    #[test]
    fn test_prompt_name_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        assert_eq!(prompt_name(&mut input, &mut out).unwrap(), None);
    }

    #[test]
    fn test_add_then_save() {
        let temp = TempDir::new().unwrap();
        let (end, text) = run(temp.path(), "alice", "1\nI am so happy and excited\n7\n");

        assert!(text.contains("Detected Mood: Happy"));
        assert!(text.contains("Celebrate"));
        assert!(text.contains("Journal saved successfully."));
        assert!(text.contains("Goodbye and take care!"));
        match end {
            SessionEnd::Saved(path) => assert_eq!(path, temp.path().join("alice_journal.json")),
            other => panic!("Expected Saved, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_journal_reports() {
        let temp = TempDir::new().unwrap();
        let (_, text) = run(temp.path(), "alice", "2\n3\n4\n5\n7\n");

        assert!(text.contains("No mood history found."));
        assert!(text.contains("No mood data available."));
        assert!(text.contains("No entries to analyze mood from."));
        assert!(text.contains("No entries in the past 7 days."));
    }

    #[test]
    fn test_blank_entry_is_rejected() {
        let temp = TempDir::new().unwrap();
        let (_, text) = run(temp.path(), "alice", "1\n   \n2\n7\n");

        assert!(text.contains("Entry cannot be empty."));
        assert!(text.contains("No mood history found."));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let temp = TempDir::new().unwrap();
        let (end, text) = run(temp.path(), "alice", "9\nabc\n7\n");

        assert_eq!(text.matches("Invalid choice. Try again.").count(), 2);
        assert!(matches!(end, SessionEnd::Saved(_)));
    }

    #[test]
    fn test_input_closed_does_not_save() {
        let temp = TempDir::new().unwrap();
        let (end, _) = run(temp.path(), "alice", "1\nhappy\n");

        assert!(matches!(end, SessionEnd::InputClosed));
        assert!(!temp.path().join("alice_journal.json").exists());
    }

    #[test]
    fn test_reports_with_entries() {
        let temp = TempDir::new().unwrap();
        let (_, text) = run(
            temp.path(),
            "alice",
            "1\nhappy\n1\nsad\n1\ngreat\n2\n3\n4\n5\n7\n",
        );

        assert!(text.contains("Mood History:"));
        assert!(text.contains(": Sad - sad"));
        assert!(text.contains("Most common mood: Happy (2 times)"));
        assert!(text.contains("Weekly Mood Summary:\nHappy: 2 time(s)\nSad: 1 time(s)\n"));
    }

    #[test]
    fn test_export_writes_file() {
        let temp = TempDir::new().unwrap();
        let (_, text) = run(temp.path(), "alice", "1\ncalm\n6\n7\n");

        let export = temp.path().join("alice_journal_export.txt");
        assert!(text.contains("Journal exported to"));
        let content = fs::read_to_string(export).unwrap();
        assert!(content.ends_with(" - Neutral - calm\n"));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let (end, text) = run(&blocker, "alice", "1\nok\n6\n7\n");

        assert!(text.contains("Error: Storage unavailable"));
        assert!(text.contains("Goodbye and take care!"));
        assert!(matches!(
            end,
            SessionEnd::SaveFailed(MoodError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_notice_messages() {
        let temp = TempDir::new().unwrap();
        run(temp.path(), "alice", "1\nfine\n7\n");

        let (_, text) = run(temp.path(), "alice", "7\n");
        assert!(text.starts_with("Previous journal loaded."));

        fs::write(temp.path().join("alice_journal.json"), "garbage").unwrap();
        let (_, text) = run(temp.path(), "alice", "2\n7\n");
        assert!(text.starts_with("Error: Journal file is corrupt"));
        assert!(text.contains("No mood history found."));
    }
}
