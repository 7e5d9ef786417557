//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all
//! journal operations regardless of the UI being used. The facade
//! dispatches to command modules, resolves user-facing list positions to
//! entry ids, and owns the welcome-flag handshake. It performs no I/O and
//! no presentation.
//!
//! `JournalApi<B: StorageBackend>` is generic over the storage backend:
//! production uses [`FsBackend`](crate::store::FsBackend), tests use
//! [`MemBackend`](crate::store::MemBackend).

use crate::commands::{self, CmdResult};
use crate::error::{JournalError, Result};
use crate::model::EntryDraft;
use crate::query::{query, EntryQuery};
use crate::store::{EntryStore, StorageBackend};
use uuid::Uuid;

pub struct JournalApi<B: StorageBackend> {
    store: EntryStore<B>,
}

impl<B: StorageBackend> JournalApi<B> {
    /// Open the journal over the given backend, loading persisted entries.
    pub fn open(backend: B) -> Self {
        Self {
            store: EntryStore::open(backend),
        }
    }

    pub fn create_entry(&mut self, draft: EntryDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_entry(&mut self, id: Uuid, draft: EntryDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete_entry(&mut self, id: Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn view_entry(&self, id: Uuid) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn list_entries(
        &self,
        params: &EntryQuery,
        page: usize,
        page_size: usize,
    ) -> Result<CmdResult> {
        commands::list::run(&self.store, params, page, page_size)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    /// Resolve a 1-based position to an entry id.
    ///
    /// Positions are always assigned within the default newest-first view
    /// (see [`commands::list`]), so resolution ignores whatever filters or
    /// sort the entry happened to be listed under.
    pub fn resolve_position(&self, position: usize) -> Result<Uuid> {
        let view = query(self.store.entries(), &EntryQuery::default());
        position
            .checked_sub(1)
            .and_then(|i| view.get(i))
            .map(|entry| entry.id)
            .ok_or_else(|| {
                JournalError::Api(format!("No entry at position {}", position))
            })
    }

    /// One-shot notice about a degraded load, if any, for the UI.
    pub fn take_load_notice(&mut self) -> Option<String> {
        self.store.take_load_notice()
    }

    pub fn welcome_pending(&self) -> bool {
        self.store.welcome_pending()
    }

    pub fn mark_welcome_seen(&self) -> Result<()> {
        self.store.mark_welcome_seen()
    }

    pub fn entry_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;
    use crate::query::{SortKey, SortOrder};
    use crate::store::MemBackend;

    fn api_with(titles: &[&str]) -> JournalApi<MemBackend> {
        let mut api = JournalApi::open(MemBackend::new());
        for title in titles {
            api.create_entry(EntryDraft::new(*title, format!("content of {}", title)))
                .unwrap();
        }
        api
    }

    #[test]
    fn test_resolve_position_is_newest_first() {
        // Created A then B; position 1 is always the newest entry
        let api = api_with(&["A", "B"]);

        let newest = api.resolve_position(1).unwrap();
        assert_eq!(api.view_entry(newest).unwrap().affected[0].title, "B");

        let oldest = api.resolve_position(2).unwrap();
        assert_eq!(api.view_entry(oldest).unwrap().affected[0].title, "A");
    }

    #[test]
    fn test_resolve_position_matches_sorted_listing() {
        // An ascending listing shows the oldest entry first but numbered 2;
        // resolving that number must land on the entry the user saw.
        let api = api_with(&["A", "B"]);
        let params = EntryQuery {
            sort_order: SortOrder::Asc,
            ..Default::default()
        };

        let listed = api.list_entries(&params, 1, 10).unwrap();
        assert_eq!(listed.listed[0].entry.title, "A");
        let shown_position = listed.listed[0].position;

        let id = api.resolve_position(shown_position).unwrap();
        assert_eq!(id, listed.listed[0].entry.id);
    }

    #[test]
    fn test_resolve_position_out_of_range() {
        let api = api_with(&["A"]);
        assert!(api.resolve_position(0).is_err());
        assert!(api.resolve_position(2).is_err());
    }

    #[test]
    fn test_crud_through_facade() {
        let mut api = api_with(&[]);

        let created = api
            .create_entry(EntryDraft::new("Day one", "words").with_mood(Mood::Productive))
            .unwrap();
        let id = created.affected[0].id;

        api.update_entry(id, EntryDraft::new("Day one, revised", "more words"))
            .unwrap();
        let viewed = api.view_entry(id).unwrap();
        assert_eq!(viewed.affected[0].title, "Day one, revised");

        api.delete_entry(id).unwrap();
        assert!(api.view_entry(id).is_err());
        assert_eq!(api.entry_count(), 0);
    }

    #[test]
    fn test_list_respects_sort_params() {
        let api = api_with(&["b", "a", "c"]);
        let params = EntryQuery {
            sort_key: SortKey::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };

        let result = api.list_entries(&params, 1, 10).unwrap();
        let titles: Vec<_> = result
            .listed
            .iter()
            .map(|le| le.entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
