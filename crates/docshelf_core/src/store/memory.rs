//! In-memory persistence port.
//!
//! Clones share one backing map, so a test can keep a handle to the store
//! it hands to the service and inspect what was written.

use super::{PersistencePort, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Map-backed port for tests and ephemeral embeddings.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read of a stored blob, bypassing the port trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Direct write of a blob, e.g. to stage pre-existing data.
    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl PersistencePort for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
