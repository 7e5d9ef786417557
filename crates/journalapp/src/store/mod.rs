//! # Storage Layer
//!
//! Persistence for journal is deliberately simple: the entire entry
//! collection is serialized as one JSON array into a fixed key-value slot,
//! and a second slot records the one-time welcome flag. There is no
//! versioning, no migration, and no conflict detection; last write wins.
//!
//! The layer splits into two pieces:
//!
//! - [`StorageBackend`]: raw slot I/O (the "how"). [`FsBackend`] keeps one
//!   file per slot under a data directory and writes atomically;
//!   [`MemBackend`] backs tests without touching the filesystem.
//! - [`EntryStore`]: the in-memory collection plus its synchronization
//!   contract (the "what"). The store is the single source of truth for the
//!   session: a failed save is reported, never rolled back.
//!
//! ## Load contract
//!
//! - Slot absent → empty collection.
//! - Slot unreadable or malformed → empty collection plus a reportable
//!   notice; the failure never propagates past the store boundary.
//! - Every loaded entry is normalized (see [`crate::model`]) and duplicate
//!   ids are dropped so the uniqueness invariant holds even for slots
//!   edited outside the app.

pub mod backend;
pub mod entry_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{StorageBackend, ENTRIES_KEY, WELCOME_KEY};
pub use entry_store::EntryStore;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
