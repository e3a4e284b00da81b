//! Durable storage: the single key-value slot the game state lives in.
//!
//! ## Key Types
//!
//! - `StorageBackend`: the slot contract (file in production, memory in
//!   tests, anything injectable)
//! - `FileStorage`: one file per key, atomic temp-then-rename writes
//! - `MemoryStorage`: `RwLock<HashMap>` backend
//! - `PersistWorker`: writer thread the store dispatches detached
//!   writes to; failures are logged, never propagated

pub mod backend;
pub mod file;
pub mod memory;
pub mod worker;

pub use backend::StorageBackend;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use worker::PersistWorker;
