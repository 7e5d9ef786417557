use crate::commands::{persist_with_notice, validate_draft, CmdMessage, CmdResult};
use crate::error::{JournalError, Result};
use crate::model::EntryDraft;
use crate::store::{EntryStore, StorageBackend};
use uuid::Uuid;

/// Full-field replacement of an existing entry.
///
/// The store treats an unknown id as a silent no-op; here it surfaces as
/// `EntryNotFound`, because callers only reach this command with an id they
/// resolved moments ago.
pub fn run<B: StorageBackend>(
    store: &mut EntryStore<B>,
    id: Uuid,
    draft: EntryDraft,
) -> Result<CmdResult> {
    validate_draft(&draft)?;

    if !store.update(&id, draft) {
        return Err(JournalError::EntryNotFound(id));
    }

    let entry = store
        .get(&id)
        .cloned()
        .ok_or(JournalError::EntryNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry updated: {}", entry.title)));
    result.affected.push(entry);
    persist_with_notice(store, &mut result);
    Ok(result)
}
