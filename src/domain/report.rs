//! Aggregate statistics over journal entries

use crate::domain::{Entry, Mood};
use chrono::NaiveDate;

/// Entries younger than this many days count towards the weekly summary
pub const WEEK_DAYS: i64 = 7;

/// Count moods in order of first appearance
pub fn mood_counts<'a, I>(entries: I) -> Vec<(Mood, usize)>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood()) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood(), 1)),
        }
    }
    counts
}

/// Most frequent mood and its count.
///
/// Equal counts resolve to the mood that appears first in `entries`.
/// Returns `None` for an empty journal.
pub fn most_common_mood(entries: &[Entry]) -> Option<(Mood, usize)> {
    mood_counts(entries)
        .into_iter()
        .fold(None, |best, (mood, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((mood, count)),
        })
}

/// Mood counts for entries less than a week old relative to `today`.
///
/// Entries dated after `today` have a negative age and are kept.
pub fn weekly_summary(entries: &[Entry], today: NaiveDate) -> Vec<(Mood, usize)> {
    mood_counts(
        entries
            .iter()
            .filter(|entry| (today - entry.date()).num_days() < WEEK_DAYS),
    )
}
