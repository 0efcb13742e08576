//! Current search engine selection
//!
//! [`SelectionStore`] owns the engine catalog and the index of the active
//! engine. It restores the index from a [`KeyValueStore`] on construction and
//! writes it back on every change.

mod parse;

use crate::engines::{Catalog, Engine};
use crate::error::SelectionError;
use crate::storage::KeyValueStore;
use tracing::{debug, info, warn};

pub use parse::parse_leading_int;

/// Storage key holding the selected index as decimal text
pub const SELECTION_KEY: &str = "selectedSearchEngineIndex";

/// Active engine selection backed by persistent storage
pub struct SelectionStore<S: KeyValueStore> {
    catalog: Catalog,
    index: usize,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Create a store over the built-in catalog
    pub fn new(storage: S) -> Self {
        let catalog = Catalog::default();
        let index = restore_index(&storage, SELECTION_KEY, &catalog);
        Self {
            catalog,
            index,
            storage,
            key: SELECTION_KEY.to_string(),
        }
    }

    /// Create a store over a custom catalog
    pub fn with_catalog(catalog: Catalog, storage: S) -> Result<Self, SelectionError> {
        Self::open(catalog, storage, SELECTION_KEY)
    }

    /// Create a store over a custom catalog and storage key
    ///
    /// Fails only for an empty catalog, where no index can be valid.
    pub fn open(
        catalog: Catalog,
        storage: S,
        key: impl Into<String>,
    ) -> Result<Self, SelectionError> {
        if catalog.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }

        let key = key.into();
        let index = restore_index(&storage, &key, &catalog);
        Ok(Self {
            catalog,
            index,
            storage,
            key,
        })
    }

    /// The active engine
    ///
    /// # Panics
    ///
    /// Panics if [`set_current_engine_index`](Self::set_current_engine_index)
    /// was given an index outside the catalog.
    pub fn current_engine(&self) -> &Engine {
        &self.catalog[self.index]
    }

    /// Index of the active engine
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// All selectable engines, in index order
    pub fn engines(&self) -> &Catalog {
        &self.catalog
    }

    /// Search URL for `query` on the active engine
    pub fn search_url(&self, query: &str) -> String {
        self.current_engine().search_url(query)
    }

    /// Change the active engine and persist the choice
    ///
    /// The index is not validated: callers must pass `index < engines().len()`.
    /// An out-of-range index is stored as given and makes the next
    /// [`current_engine`](Self::current_engine) panic. Use
    /// [`select`](Self::select) for a checked change.
    ///
    /// A failed storage write is logged and otherwise ignored. The selection
    /// still changes for this session but will not be restored next time.
    pub fn set_current_engine_index(&mut self, index: usize) {
        self.index = index;
        if let Err(e) = self.storage.set(&self.key, &index.to_string()) {
            warn!("Failed to persist engine selection {}: {}", index, e);
        }
    }

    /// Checked variant of [`set_current_engine_index`](Self::set_current_engine_index)
    ///
    /// Leaves state and storage untouched when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if !self.catalog.contains_index(index) {
            return Err(SelectionError::InvalidIndex {
                index,
                len: self.catalog.len(),
            });
        }
        self.set_current_engine_index(index);
        info!("Selected search engine: {}", self.current_engine().id);
        Ok(())
    }

    /// Select an engine by its id
    pub fn select_by_id(&mut self, id: &str) -> Result<(), SelectionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectionError::UnknownEngine(id.to_string()))?;
        self.select(index)
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Read the persisted index, falling back to 0 for anything unusable
fn restore_index<S: KeyValueStore>(storage: &S, key: &str, catalog: &Catalog) -> usize {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return 0,
        Err(e) => {
            warn!("Failed to read engine selection: {}", e);
            return 0;
        }
    };

    let Some(parsed) = parse_leading_int(&raw) else {
        debug!("Ignoring malformed engine selection {:?}", raw);
        return 0;
    };

    match usize::try_from(parsed) {
        Ok(index) if catalog.contains_index(index) => index,
        _ => {
            debug!(
                "Ignoring engine selection {} outside catalog of {}",
                parsed,
                catalog.len()
            );
            0
        }
    }
}
