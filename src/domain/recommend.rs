//! Activity suggestions per mood

use crate::domain::Mood;
use std::str::FromStr;

/// Suggestion for labels that don't name a known mood
pub const DEFAULT_SUGGESTION: &str = "Take care of yourself.";

/// Suggest an activity for a mood
pub fn recommend(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "Celebrate, savoring the moment, and let the good vibes flow.",
        Mood::Sad => "1. Walk under moonlight. 2. order Pizza. 3. eat chocolates",
        Mood::Neutral => "Read a good book or enjoy a warm drink.",
        Mood::Unknown => "Try expressing more or journaling deeply.",
    }
}

/// Suggest an activity for a free-form mood label
pub fn recommend_label(label: &str) -> &'static str {
    Mood::from_str(label)
        .map(recommend)
        .unwrap_or(DEFAULT_SUGGESTION)
}
