//! # Journal Architecture
//!
//! Journal is a **UI-agnostic journaling library**. This is not a CLI
//! application that happens to have some library code — it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/journal-cli)                             │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves list positions → entry ids                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: CRUD, query, paginate, stats        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait over key-value slots       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pure pieces — the query pipeline ([`query`]) and the pagination
//! slicer ([`page`]) — take slices in and hand owned views back; they never
//! touch storage or session state.
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! serve a TUI or a web frontend.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod query;
pub mod store;
