use crate::commands::{persist_with_notice, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};
use uuid::Uuid;

/// Removes an entry. An unknown id is a silent no-op, not an error; through
/// the normal flow the id was just resolved, so absence only means the
/// entry is already gone.
pub fn run<B: StorageBackend>(store: &mut EntryStore<B>, id: Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove(&id) {
        Some(entry) => {
            result.add_message(CmdMessage::success(format!("Entry deleted: {}", entry.title)));
            result.affected.push(entry);
            persist_with_notice(store, &mut result);
        }
        None => {
            result.add_message(CmdMessage::info("Entry was already gone."));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::EntryDraft;
    use crate::store::MemBackend;

    #[test]
    fn test_delete_removes_and_reports() {
        let mut store = EntryStore::open(MemBackend::new());
        let entry = store.add(EntryDraft::new("Gone soon", "x"));

        let result = run(&mut store, entry.id).unwrap();

        assert!(store.is_empty());
        assert_eq!(result.affected.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Success));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = EntryStore::open(MemBackend::new());
        store.add(EntryDraft::new("Stays", "x"));

        let result = run(&mut store, Uuid::new_v4()).unwrap();

        assert_eq!(store.len(), 1);
        assert!(result.affected.is_empty());
        assert!(result
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Error));
    }
}
