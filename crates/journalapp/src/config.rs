//! # Configuration
//!
//! Layered via [`confique`], resolved in priority order:
//!
//! 1. Environment variables (`JOURNAL_PAGE_SIZE`, `JOURNAL_DATA_DIR`).
//! 2. `journal.toml` in the data directory.
//! 3. Compiled defaults.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JournalError, Result};
use crate::page::DEFAULT_PAGE_SIZE;

/// Configuration for journal, stored in `journal.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Entries shown per page when listing.
    #[config(default = 5, env = "JOURNAL_PAGE_SIZE")]
    pub page_size: usize,

    /// Override for the data directory holding the storage slots.
    #[config(env = "JOURNAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: None,
        }
    }
}

impl JournalConfig {
    /// Load configuration, layering env vars over `journal.toml` in `dir`
    /// (when present) over the compiled defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        JournalConfig::builder()
            .env()
            .file(dir.join("journal.toml"))
            .load()
            .map_err(|e| JournalError::Store(format!("invalid configuration: {}", e)))
    }

    /// A usable page size: zero would render nothing forever, so it falls
    /// back to the default.
    pub fn page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}
