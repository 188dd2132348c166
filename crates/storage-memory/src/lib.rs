//! In-memory storage implementation for adflow.
//!
//! This crate implements the preference-store trait defined in
//! `adflow-core` over a process-local concurrent map, standing in for
//! the browser's local storage. It also carries the storage-event
//! contract: watchers registered on a store are notified of every write
//! or removal, the way sibling browsing contexts observe `storage`
//! events.
//!
//! ```text
//! core (domain, traits)
//!          │
//!          ▼
//! storage-memory (this crate)
//! ```

mod preferences;

pub use preferences::MemoryStore;
