use crate::commands::{CmdMessage, CmdResult, ListedEntry, PageInfo};
use crate::error::Result;
use crate::page::paginate;
use crate::query::{query, EntryQuery};
use crate::store::{EntryStore, StorageBackend};

/// The filtered, sorted, paginated view of the journal.
///
/// Positions are 1-based and always assigned within the default
/// newest-first view, never within the filtered or re-sorted one. A
/// sorted listing may therefore show positions out of order, but "entry
/// 7" names the same entry no matter which filters it was listed under,
/// so a follow-up `view`/`edit`/`delete` acts on what the user saw.
pub fn run<B: StorageBackend>(
    store: &EntryStore<B>,
    params: &EntryQuery,
    page: usize,
    page_size: usize,
) -> Result<CmdResult> {
    let canonical = query(store.entries(), &EntryQuery::default());
    let view = query(store.entries(), params);
    let total_entries = view.len();

    let positioned: Vec<ListedEntry> = view
        .into_iter()
        .map(|entry| ListedEntry {
            position: canonical
                .iter()
                .position(|e| e.id == entry.id)
                .map_or(0, |i| i + 1),
            entry,
        })
        .collect();

    let paged = paginate(&positioned, page, page_size);

    let mut result = CmdResult::default();
    result.page = Some(PageInfo {
        page,
        total_pages: paged.total_pages,
        total_entries,
    });
    result.listed = paged.visible;

    if store.is_empty() {
        result.add_message(CmdMessage::info(
            "Your journal is empty. Create your first entry to get started.",
        ));
    } else if total_entries == 0 {
        result.add_message(CmdMessage::info("No entries match the current filters."));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;
    use crate::query::{SortKey, SortOrder};
    use crate::store::entry_store::fixtures::StoreFixture;

    #[test]
    fn test_list_pages_keep_view_positions() {
        let store = StoreFixture::new().with_entries(7).store;

        let page2 = run(&store, &EntryQuery::default(), 2, 3).unwrap();
        let positions: Vec<_> = page2.listed.iter().map(|le| le.position).collect();
        assert_eq!(positions, vec![4, 5, 6]);

        let info = page2.page.unwrap();
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_entries, 7);
    }

    #[test]
    fn test_list_empty_journal_message() {
        let store = StoreFixture::new().store;
        let result = run(&store, &EntryQuery::default(), 1, 5).unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.page.unwrap().total_pages, 0);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_list_no_match_message_differs_from_empty() {
        let store = StoreFixture::new()
            .with_entry("Only entry", Mood::Happy, &[])
            .store;
        let params = EntryQuery {
            mood: Some(Mood::Sad),
            ..Default::default()
        };

        let result = run(&store, &params, 1, 5).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages[0].content.contains("filters"));
    }

    #[test]
    fn test_positions_follow_default_view_under_sorting() {
        let store = StoreFixture::new()
            .with_entry("Alpha", Mood::Happy, &[])
            .with_entry("Zulu", Mood::Sad, &[])
            .store;

        // Default view is newest first: Zulu is 1, Alpha is 2. An ascending
        // listing reorders the rows but each entry keeps its number.
        let params = EntryQuery {
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let result = run(&store, &params, 1, 5).unwrap();

        assert_eq!(result.listed[0].entry.title, "Alpha");
        assert_eq!(result.listed[0].position, 2);
        assert_eq!(result.listed[1].entry.title, "Zulu");
        assert_eq!(result.listed[1].position, 1);
    }

    #[test]
    fn test_positions_survive_filtering() {
        let store = StoreFixture::new()
            .with_entry("Old sad", Mood::Sad, &[])
            .with_entry("New happy", Mood::Happy, &[])
            .store;

        let params = EntryQuery {
            mood: Some(Mood::Sad),
            ..Default::default()
        };
        let result = run(&store, &params, 1, 5).unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].entry.title, "Old sad");
        // Still number 2, its place in the unfiltered newest-first view
        assert_eq!(result.listed[0].position, 2);
    }

    #[test]
    fn test_list_sorted_by_title() {
        let store = StoreFixture::new()
            .with_entry("beta", Mood::Neutral, &[])
            .with_entry("Alpha", Mood::Neutral, &[])
            .store;
        let params = EntryQuery {
            sort_key: SortKey::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };

        let result = run(&store, &params, 1, 5).unwrap();
        let titles: Vec<_> = result
            .listed
            .iter()
            .map(|le| le.entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Alpha", "beta"]);
    }
}
