use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::MoodStore;
use crate::models::mood_entry::{InsertMoodEntry, MoodEntry};

/// In-memory store (entries are lost on restart)
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<Uuid, Slot>,
    next_seq: u64,
}

struct Slot {
    /// Insertion order, breaks `created_at` ties.
    seq: u64,
    entry: MoodEntry,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodStore for MemoryStore {
    async fn list(&self) -> anyhow::Result<Vec<MoodEntry>> {
        let inner = self.inner.read().await;

        let mut slots: Vec<&Slot> = inner.entries.values().collect();
        slots.sort_by(|a, b| {
            b.entry
                .created_at
                .cmp(&a.entry.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        Ok(slots.into_iter().map(|s| s.entry.clone()).collect())
    }

    async fn create(&self, input: InsertMoodEntry) -> anyhow::Result<MoodEntry> {
        let mut inner = self.inner.write().await;

        let mut id = Uuid::new_v4();
        while inner.entries.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let entry = MoodEntry::from_insert(input, id, Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            id,
            Slot {
                seq,
                entry: entry.clone(),
            },
        );

        tracing::debug!(entry_id = %id, mood = %entry.mood, "Mood entry created");
        Ok(entry)
    }
}
