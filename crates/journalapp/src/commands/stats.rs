use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{JournalEntry, Mood};
use crate::store::{EntryStore, StorageBackend};
use serde::Serialize;

/// Journal-wide statistics: totals and the per-mood breakdown.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalStats {
    pub total_entries: usize,
    pub total_words: usize,
    /// Per-mood counts in display order; moods with zero entries are
    /// omitted to keep the breakdown uncluttered.
    pub mood_counts: Vec<(Mood, usize)>,
}

impl JournalStats {
    pub fn compute(entries: &[JournalEntry]) -> Self {
        let mood_counts = Mood::ALL
            .iter()
            .map(|&mood| (mood, entries.iter().filter(|e| e.mood == mood).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            total_entries: entries.len(),
            total_words: entries.iter().map(|e| e.word_count()).sum(),
            mood_counts,
        }
    }
}

pub fn run<B: StorageBackend>(store: &EntryStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.stats = Some(JournalStats::compute(store.entries()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::entry_store::fixtures::StoreFixture;

    #[test]
    fn test_stats_counts_moods_and_words() {
        let store = StoreFixture::new()
            .with_entry("A", Mood::Happy, &[])
            .with_entry("B", Mood::Happy, &[])
            .with_entry("C", Mood::Sad, &[])
            .store;

        let result = run(&store).unwrap();
        let stats = result.stats.unwrap();

        assert_eq!(stats.total_entries, 3);
        assert!(stats.total_words > 0);
        assert_eq!(stats.mood_counts, vec![(Mood::Happy, 2), (Mood::Sad, 1)]);
    }

    #[test]
    fn test_stats_empty_journal() {
        let store = StoreFixture::new().store;
        let stats = run(&store).unwrap().stats.unwrap();

        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_words, 0);
        assert!(stats.mood_counts.is_empty());
    }
}
