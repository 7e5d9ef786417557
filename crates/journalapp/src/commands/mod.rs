//! # Command Layer
//!
//! The core business logic. Each user intent lives in its own submodule and
//! is a pure function over the [`EntryStore`](crate::store::EntryStore);
//! commands return structured [`CmdResult`] values and never touch stdout,
//! stderr, or process exits. The UI layer decides how to render them.
//!
//! Validation happens here, at the boundary: the store is never asked to
//! accept an invalid draft through the normal path (it still normalizes
//! storage-sourced data on load, since slots can be edited externally).
//!
//! Persistence failures do not abort a command. The mutation stays applied
//! in memory, the failure is surfaced once as a warning message, and no
//! retry is attempted.
//!
//! ## Command Modules
//!
//! - [`create`]: create a new entry from a draft
//! - [`update`]: full-field replacement of an existing entry
//! - [`delete`]: remove an entry
//! - [`view`]: retrieve a single entry
//! - [`list`]: filtered, sorted, paginated view of the journal
//! - [`stats`]: totals and per-mood breakdown

use crate::error::{JournalError, Result};
use crate::model::{EntryDraft, JournalEntry, TITLE_MAX_CHARS};
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An entry paired with its 1-based position in the current ordered view.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub position: usize,
    pub entry: JournalEntry,
}

/// Pagination facts for a listed view.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries modified by the operation.
    pub affected: Vec<JournalEntry>,
    /// Entries to display, with their view positions.
    pub listed: Vec<ListedEntry>,
    /// Pagination facts when the result is a page of a larger view.
    pub page: Option<PageInfo>,
    /// Journal statistics (for the `stats` command).
    pub stats: Option<stats::JournalStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Boundary validation for user-submitted drafts, mirroring the entry form:
/// title required and capped, content required.
pub fn validate_draft(draft: &EntryDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(JournalError::Validation("Title is required".to_string()));
    }
    if draft.title.chars().count() > TITLE_MAX_CHARS {
        return Err(JournalError::Validation(format!(
            "Title must be at most {} characters",
            TITLE_MAX_CHARS
        )));
    }
    if draft.content.trim().is_empty() {
        return Err(JournalError::Validation("Content is required".to_string()));
    }
    Ok(())
}

/// Persist the store and convert failure into a one-shot warning message.
/// The in-memory mutation is kept either way.
pub(crate) fn persist_with_notice<B: crate::store::StorageBackend>(
    store: &crate::store::EntryStore<B>,
    result: &mut CmdResult,
) {
    if let Err(e) = store.persist() {
        tracing::warn!(error = %e, "failed to persist entries");
        result.add_message(CmdMessage::warning(format!(
            "Your change could not be saved and may be lost when the session ends: {}",
            e
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_draft_accepts_normal_input() {
        let draft = EntryDraft::new("A day", "It went fine.");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_validate_draft_rejects_blank_title() {
        let draft = EntryDraft::new("   ", "content");
        assert!(matches!(
            validate_draft(&draft),
            Err(JournalError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_draft_rejects_long_title() {
        let draft = EntryDraft::new("x".repeat(TITLE_MAX_CHARS + 1), "content");
        assert!(validate_draft(&draft).is_err());

        let at_limit = EntryDraft::new("x".repeat(TITLE_MAX_CHARS), "content");
        assert!(validate_draft(&at_limit).is_ok());
    }

    #[test]
    fn test_validate_draft_rejects_blank_content() {
        let draft = EntryDraft::new("title", "\n  ");
        assert!(matches!(
            validate_draft(&draft),
            Err(JournalError::Validation(_))
        ));
    }
}
