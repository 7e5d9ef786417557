use crate::commands::CmdResult;
use crate::error::{JournalError, Result};
use crate::store::{EntryStore, StorageBackend};
use uuid::Uuid;

pub fn run<B: StorageBackend>(store: &EntryStore<B>, id: Uuid) -> Result<CmdResult> {
    let entry = store
        .get(&id)
        .cloned()
        .ok_or(JournalError::EntryNotFound(id))?;

    let mut result = CmdResult::default();
    result.affected.push(entry);
    Ok(result)
}
