use crate::commands::{persist_with_notice, validate_draft, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryDraft;
use crate::store::{EntryStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut EntryStore<B>, draft: EntryDraft) -> Result<CmdResult> {
    validate_draft(&draft)?;

    let entry = store.add(draft);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry created: {}", entry.title)));
    result.affected.push(entry);
    persist_with_notice(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Mood;
    use crate::store::MemBackend;

    #[test]
    fn test_create_adds_and_persists() {
        let mut store = EntryStore::open(MemBackend::new());
        let draft = EntryDraft::new("First", "content")
            .with_mood(Mood::Happy)
            .with_tags(vec!["start".to_string()]);

        let result = run(&mut store, draft).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].title, "First");
        assert_eq!(result.affected[0].created_at, result.affected[0].last_edited);
        assert_eq!(store.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Success));
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_mutation() {
        let mut store = EntryStore::open(MemBackend::new());
        let draft = EntryDraft::new("", "content");

        assert!(run(&mut store, draft).is_err());
        assert!(store.is_empty());
    }
}
