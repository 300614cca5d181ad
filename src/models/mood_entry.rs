use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    pub name: Option<String>,
    pub mood: String,
    pub emoji: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new entry. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertMoodEntry {
    pub name: Option<String>,
    pub mood: String,
    pub emoji: String,
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn from_insert(input: InsertMoodEntry, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            mood: input.mood,
            emoji: input.emoji,
            note: input.note,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodCount {
    pub mood: String,
    pub emoji: String,
    pub count: usize,
}

/// GET /api/mood-entries/stats
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_entries: usize,
    pub entries_this_week: usize,
    pub most_common_mood: Option<MoodCount>,
    pub latest_emoji: Option<String>,
}

impl MoodStats {
    /// `entries` must be ordered newest first, as the store lists them.
    pub fn from_entries(entries: &[MoodEntry], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);

        // First-seen order doubles as the tie-break: the mood seen most recently wins.
        let mut counts: Vec<MoodCount> = Vec::new();
        for entry in entries {
            match counts.iter_mut().find(|c| c.mood == entry.mood) {
                Some(c) => c.count += 1,
                None => counts.push(MoodCount {
                    mood: entry.mood.clone(),
                    emoji: entry.emoji.clone(),
                    count: 1,
                }),
            }
        }

        let mut most_common: Option<MoodCount> = None;
        for c in counts {
            if most_common.as_ref().map_or(true, |best| c.count > best.count) {
                most_common = Some(c);
            }
        }

        Self {
            total_entries: entries.len(),
            entries_this_week: entries.iter().filter(|e| e.created_at >= week_ago).count(),
            most_common_mood: most_common,
            latest_emoji: entries.first().map(|e| e.emoji.clone()),
        }
    }
}
