//! Mood labels and keyword classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood assigned to a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    /// No keyword matched
    Unknown,
}

/// Moods a keyword can vote for, in tie-break priority order
const SCORED: [Mood; 3] = [Mood::Happy, Mood::Sad, Mood::Neutral];

const HAPPY_WORDS: &[&str] = &[
    "happy", "great", "love", "optimism", "excited", "pride", "cool",
];
const SAD_WORDS: &[&str] = &[
    "sad",
    "tired",
    "angry",
    "upset",
    "bored",
    "depressed",
    "anxious",
];
const NEUTRAL_WORDS: &[&str] = &["okay", "fine", "normal", "average", "calm", "meh"];

impl Mood {
    /// All moods, in declaration order
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Neutral, Mood::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Unknown => "Unknown",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => HAPPY_WORDS,
            Mood::Sad => SAD_WORDS,
            Mood::Neutral => NEUTRAL_WORDS,
            Mood::Unknown => &[],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "neutral" => Ok(Mood::Neutral),
            "unknown" => Ok(Mood::Unknown),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: Happy, Sad, Neutral, Unknown",
                s
            )),
        }
    }
}

/// Classify free text by counting mood keywords.
///
/// Tokens are the lower-cased, whitespace-separated words of `text`, matched
/// literally (punctuation stays attached). The mood with the most hits wins;
/// equal counts resolve to Happy, then Sad, then Neutral. Text without any
/// keyword is `Unknown`.
pub fn classify(text: &str) -> Mood {
    let lowered = text.to_lowercase();
    let mut tally = [0usize; SCORED.len()];

    for token in lowered.split_whitespace() {
        if let Some(slot) = SCORED
            .iter()
            .position(|mood| mood.keywords().contains(&token))
        {
            tally[slot] += 1;
        }
    }

    let mut best: Option<(Mood, usize)> = None;
    for (mood, &count) in SCORED.iter().zip(tally.iter()) {
        // strict comparison keeps the earlier mood on ties
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((*mood, count));
        }
    }

    best.map(|(mood, _)| mood).unwrap_or(Mood::Unknown)
}
