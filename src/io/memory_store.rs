use std::cell::{Cell, RefCell};

use crate::{
    common::error::StoreError,
    io::store::{LedgerStore, StoredState},
};

/// In-process store for tests and embedding. Not shared across threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<StoredState>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoredState) -> Self {
        let store = Self::default();
        store.state.replace(Some(state));
        store
    }

    /// Makes every following `save` fail until switched back.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Option<StoredState> {
        self.state.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredState>, StoreError> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &StoredState) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Unavailable("memory store rejecting writes".into()));
        }
        self.state.replace(Some(state.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
