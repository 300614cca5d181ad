pub mod ai;
pub mod health;
pub mod mood_entries;
