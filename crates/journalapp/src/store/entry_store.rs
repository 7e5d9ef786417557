use super::backend::{StorageBackend, ENTRIES_KEY, WELCOME_KEY};
use crate::error::Result;
use crate::model::{EntryDraft, JournalEntry};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// The in-memory entry collection, ordered most-recent-first.
///
/// The store is the single source of truth for the session. Mutations are
/// synchronous and applied in memory first; [`EntryStore::persist`] mirrors
/// the full collection out to the backend and its failure is reported to
/// the caller without rolling the mutation back.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    entries: Vec<JournalEntry>,
    load_notice: Option<String>,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Open the store, loading whatever the entries slot holds.
    ///
    /// A missing slot means "no entries yet". An unreadable or malformed
    /// slot degrades to an empty collection with a reportable notice; it is
    /// never an error past this boundary.
    pub fn open(backend: B) -> Self {
        let mut load_notice = None;
        let entries = match backend.read_slot(ENTRIES_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "entries slot is malformed, starting empty");
                    load_notice =
                        Some("Stored entries could not be read; starting with an empty journal.".to_string());
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(error = %e, "failed to read entries slot, starting empty");
                load_notice =
                    Some("Stored entries could not be read; starting with an empty journal.".to_string());
                Vec::new()
            }
        };

        let entries = dedupe_ids(entries);
        debug!(count = entries.len(), "entry store opened");

        Self {
            backend,
            entries,
            load_notice,
        }
    }

    /// A one-shot notice about load degradation, for the UI to surface.
    pub fn take_load_notice(&mut self) -> Option<String> {
        self.load_notice.take()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == *id)
    }

    /// Create an entry from a draft: fresh id, both timestamps set to now,
    /// prepended so the collection stays most-recent-first.
    pub fn add(&mut self, draft: EntryDraft) -> JournalEntry {
        let now = Utc::now();
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            mood: draft.mood,
            tags: draft.tags,
            created_at: now,
            last_edited: now,
        };
        self.entries.insert(0, entry.clone());
        entry
    }

    /// Full-field replacement of an existing entry. Preserves `id` and
    /// `created_at`, refreshes `last_edited`. Returns `false` (no-op) when
    /// the id is unknown.
    pub fn update(&mut self, id: &Uuid, draft: EntryDraft) -> bool {
        match self.entries.iter_mut().find(|e| e.id == *id) {
            Some(entry) => {
                entry.title = draft.title;
                entry.content = draft.content;
                entry.mood = draft.mood;
                entry.tags = draft.tags;
                entry.last_edited = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Excise an entry. Returns `None` (no-op) when the id is unknown.
    pub fn remove(&mut self, id: &Uuid) -> Option<JournalEntry> {
        let pos = self.entries.iter().position(|e| e.id == *id)?;
        Some(self.entries.remove(pos))
    }

    /// Mirror the full collection out to the entries slot.
    ///
    /// Persistence is explicit so callers detect failure synchronously.
    /// On failure the in-memory state is retained and stays authoritative;
    /// the caller reports once and does not retry.
    pub fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.backend.write_slot(ENTRIES_KEY, &raw)?;
        debug!(count = self.entries.len(), "entries persisted");
        Ok(())
    }

    /// True on first run: the welcome flag is unset and the journal is
    /// empty. Read failures count as "already seen".
    pub fn welcome_pending(&self) -> bool {
        self.entries.is_empty()
            && matches!(self.backend.read_slot(WELCOME_KEY), Ok(None))
    }

    pub fn mark_welcome_seen(&self) -> Result<()> {
        self.backend.write_slot(WELCOME_KEY, "true")
    }
}

/// Drops entries whose id was already seen, keeping the first occurrence.
/// Hand-edited slots are the only way duplicates can arise.
fn dedupe_ids(entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
    let mut seen = Vec::with_capacity(entries.len());
    let mut unique = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.contains(&entry.id) {
            warn!(id = %entry.id, "dropping entry with duplicate id");
            continue;
        }
        seen.push(entry.id);
        unique.push(entry);
    }
    unique
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Mood;
    use crate::store::MemBackend;

    pub struct StoreFixture {
        pub store: EntryStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: EntryStore::open(MemBackend::new()),
            }
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = EntryDraft::new(
                    format!("Test Entry {}", i + 1),
                    format!("Content for entry {}", i + 1),
                );
                self.store.add(draft);
            }
            self
        }

        pub fn with_entry(mut self, title: &str, mood: Mood, tags: &[&str]) -> Self {
            let draft = EntryDraft::new(title, format!("Content of {}", title))
                .with_mood(mood)
                .with_tags(tags.iter().map(|t| t.to_string()).collect());
            self.store.add(draft);
            self
        }
    }
}
