//! # Query Pipeline
//!
//! Pure filter + sort over the full entry collection. The pipeline never
//! mutates its input and is re-derived from scratch on every call; with a
//! single-user journal there is nothing to gain from incremental diffing.
//!
//! Filters AND-combine and run before sorting:
//!
//! - mood: exact match, `None` disables (the "All" sentinel),
//! - tag: case-insensitive substring match against any tag,
//! - search term: case-insensitive substring match against title OR content.

use crate::model::{JournalEntry, Mood};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    CreatedAt,
    Title,
    Mood,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "created" | "created_at" | "createdat" | "date" => Ok(SortKey::CreatedAt),
            "title" => Ok(SortKey::Title),
            "mood" => Ok(SortKey::Mood),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Filter and sort parameters for one derived view.
///
/// `None` filters are disabled; the default is "everything, newest first".
#[derive(Debug, Clone, Default)]
pub struct EntryQuery {
    pub search_term: Option<String>,
    pub mood: Option<Mood>,
    pub tag: Option<String>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl EntryQuery {
    fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(mood) = self.mood {
            if entry.mood != mood {
                return false;
            }
        }

        if let Some(tag) = active(&self.tag) {
            let needle = tag.to_lowercase();
            if !entry.tags.iter().any(|t| t.to_lowercase().contains(&needle)) {
                return false;
            }
        }

        if let Some(term) = active(&self.search_term) {
            let needle = term.to_lowercase();
            if !entry.title.to_lowercase().contains(&needle)
                && !entry.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }

    fn compare(&self, a: &JournalEntry, b: &JournalEntry) -> Ordering {
        let ascending = match self.sort_key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Mood => a
                .mood
                .name()
                .to_lowercase()
                .cmp(&b.mood.name().to_lowercase()),
        };
        match self.sort_order {
            SortOrder::Asc => ascending,
            // Reversal of the ascending comparator: antisymmetric, and
            // Equal stays Equal so stability still decides ties.
            SortOrder::Desc => ascending.reverse(),
        }
    }
}

/// Empty filter strings behave as disabled filters.
fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|s| !s.is_empty())
}

/// Derives the ordered view for `params` from the full collection.
///
/// The sort is stable (`slice::sort_by`): entries whose keys compare equal
/// keep the collection's relative order, in both sort directions.
pub fn query(entries: &[JournalEntry], params: &EntryQuery) -> Vec<JournalEntry> {
    let mut view: Vec<JournalEntry> = entries
        .iter()
        .filter(|e| params.matches(e))
        .cloned()
        .collect();
    view.sort_by(|a, b| params.compare(a, b));
    view
}
