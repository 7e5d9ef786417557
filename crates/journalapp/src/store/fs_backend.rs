use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed slots: one `<key>.json` file per slot under a data
/// directory. The directory is created lazily on first write.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(JournalError::Io)?;
        Ok(Some(raw))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JournalError::Io)?;
        }

        // Write to tmp then rename so readers never see a partial slot
        let path = self.slot_path(key);
        let tmp = self.root.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).map_err(JournalError::Io)?;
        fs::rename(&tmp, &path).map_err(JournalError::Io)?;
        Ok(())
    }
}
