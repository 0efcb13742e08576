//! Search-Selector: persisted choice of the active search engine
//!
//! A fixed catalog of search engines, one of which is current. The choice is
//! restored from a key-value store on startup and written back whenever it
//! changes.

pub mod config;
pub mod engines;
pub mod error;
pub mod selection;
pub mod storage;

pub use config::Settings;
pub use engines::{Catalog, Engine};
pub use error::{SelectionError, StorageError};
pub use selection::{SelectionStore, SELECTION_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
