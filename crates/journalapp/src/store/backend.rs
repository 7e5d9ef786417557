use crate::error::Result;

/// Slot key under which the full entry collection is serialized.
pub const ENTRIES_KEY: &str = "entries";

/// Slot key recording that the one-time welcome notice was shown.
pub const WELCOME_KEY: &str = "welcome-seen";

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::EntryStore`] handles the "what" (collection state,
/// normalization, persistence policy).
pub trait StorageBackend {
    /// Read the raw string stored under `key`.
    /// Returns `Ok(None)` if the slot has never been written.
    /// Returns `Err` only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) so a crash can never
    /// leave a partially written slot behind.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}
