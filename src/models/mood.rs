use serde::Serialize;

/// One of the moods offered by the picker and named in the classifier prompt.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CanonicalMood {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub static CANONICAL_MOODS: [CanonicalMood; 12] = [
    CanonicalMood { id: "happy", name: "Happy", emoji: "😊" },
    CanonicalMood { id: "excited", name: "Excited", emoji: "🤩" },
    CanonicalMood { id: "calm", name: "Calm", emoji: "😌" },
    CanonicalMood { id: "love", name: "Love", emoji: "🥰" },
    CanonicalMood { id: "sad", name: "Sad", emoji: "😢" },
    CanonicalMood { id: "tired", name: "Tired", emoji: "😴" },
    CanonicalMood { id: "angry", name: "Angry", emoji: "😤" },
    CanonicalMood { id: "anxious", name: "Anxious", emoji: "😰" },
    CanonicalMood { id: "grateful", name: "Grateful", emoji: "🙏" },
    CanonicalMood { id: "energetic", name: "Energetic", emoji: "⚡" },
    CanonicalMood { id: "confused", name: "Confused", emoji: "😕" },
    CanonicalMood { id: "peaceful", name: "Peaceful", emoji: "☮️" },
];

/// Case-insensitive lookup by display name or id.
pub fn find_canonical(label: &str) -> Option<&'static CanonicalMood> {
    let label = label.trim();
    CANONICAL_MOODS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(label) || m.id.eq_ignore_ascii_case(label))
}

/// Comma-separated display names, as they appear in prompts.
pub fn canonical_names() -> String {
    CANONICAL_MOODS
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(", ")
}
