//! Mood entry persistence.
//!
//! Handlers only see the [`MoodStore`] trait. The in-memory implementation is
//! the only one today; a relational backend would slot in behind the same
//! contract.

use async_trait::async_trait;

use crate::models::mood_entry::{InsertMoodEntry, MoodEntry};

mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait MoodStore: Send + Sync {
    /// All entries, newest first.
    async fn list(&self) -> anyhow::Result<Vec<MoodEntry>>;

    /// Assign an id and timestamp, store the entry, and return it.
    /// `input` is assumed to be validated already.
    async fn create(&self, input: InsertMoodEntry) -> anyhow::Result<MoodEntry>;
}
