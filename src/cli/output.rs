//! Output formatting utilities

use crate::application::Added;
use crate::domain::Mood;

pub const MENU: &str = "\
--- Mood Journal Menu ---
1. Add Entry
2. Show Mood History
3. Show Most Common Mood
4. Recommend Activity
5. Weekly Mood Summary
6. Export to .txt
7. Save & Exit";

/// Format history lines under a heading
pub fn format_history(lines: &[String]) -> String {
    let mut output = String::from("Mood History:\n");
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

pub fn format_added(added: &Added) -> String {
    format!("Detected Mood: {}\n{}", added.mood, added.suggestion)
}

pub fn format_most_common(mood: Mood, count: usize) -> String {
    format!("Most common mood: {} ({} times)", mood, count)
}

/// Format weekly counts, keeping the order they were counted in
pub fn format_weekly_summary(counts: &[(Mood, usize)]) -> String {
    let mut output = String::from("Weekly Mood Summary:\n");
    for (mood, count) in counts {
        output.push_str(&format!("{}: {} time(s)\n", mood, count));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommend;

    #[test]
    fn test_format_history() {
        let lines = vec![
            "2025-01-16: Happy - great day".to_string(),
            "2025-01-17: Sad - tired".to_string(),
        ];
        let output = format_history(&lines);
        assert_eq!(
            output,
            "Mood History:\n2025-01-16: Happy - great day\n2025-01-17: Sad - tired\n"
        );
    }

    #[test]
    fn test_format_added() {
        let added = Added {
            mood: Mood::Neutral,
            suggestion: recommend(Mood::Neutral),
        };
        assert_eq!(
            format_added(&added),
            "Detected Mood: Neutral\nRead a good book or enjoy a warm drink."
        );
    }

    #[test]
    fn test_format_most_common() {
        assert_eq!(
            format_most_common(Mood::Happy, 2),
            "Most common mood: Happy (2 times)"
        );
    }

    #[test]
    fn test_format_weekly_summary_keeps_order() {
        let output = format_weekly_summary(&[(Mood::Sad, 3), (Mood::Happy, 1)]);
        assert_eq!(
            output,
            "Weekly Mood Summary:\nSad: 3 time(s)\nHappy: 1 time(s)\n"
        );
    }

    #[test]
    fn test_menu_lists_seven_options() {
        for n in 1..=7 {
            assert!(MENU.contains(&format!("{}. ", n)));
        }
    }
}
