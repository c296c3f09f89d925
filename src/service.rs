use crate::{
    common::{
        config::Settings,
        error::{LedgerError, StoreError},
        event::{LedgerIntent, Outcome},
        money::Money,
    },
    domain::{ledger::Ledger, payment_method::PaymentMethod, snapshot::SnapshotEntry},
    io::store::{LedgerStore, StoredState},
    worker::processor::Processor,
};

/// Owns one ledger and the store it is persisted to.
///
/// Every intent runs to completion before `apply` returns: mutation, derived
/// totals, then a save. A failed save is logged and the in-memory state stays
/// authoritative; the caller can re-render immediately either way.
#[derive(Debug)]
pub struct LedgerService<S: LedgerStore> {
    ledger: Ledger,
    processor: Processor,
    store: S,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Loads saved state, or seeds a fresh ledger from `settings` when the
    /// store is empty.
    pub fn open(store: S, settings: &Settings) -> Result<Self, StoreError> {
        let state = match store.load()? {
            Some(state) => state,
            None => settings.initial_state(),
        };
        let ledger = state.into_ledger(settings.default_goal);
        tracing::info!(
            methods = ledger.methods.len(),
            snapshots = ledger.history.len(),
            goal = %ledger.goal,
            "ledger opened"
        );
        Ok(Self::with_ledger(ledger, store))
    }

    pub fn with_ledger(ledger: Ledger, store: S) -> Self {
        Self {
            ledger,
            processor: Processor::new(),
            store,
        }
    }

    pub fn apply(&mut self, intent: LedgerIntent) -> Result<Outcome, LedgerError> {
        let outcome = self.processor.process(&mut self.ledger, intent)?;
        if outcome == Outcome::Changed {
            if let Err(e) = self.flush() {
                tracing::error!(error = %e, "failed to persist ledger, keeping in-memory state");
            }
        }
        Ok(outcome)
    }

    /// Saves the current state and reports the result to the caller.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.store.save(&StoredState::capture(&self.ledger))
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        self.ledger.methods.as_slice()
    }

    pub fn total(&self) -> Money {
        self.ledger.total()
    }

    /// Newest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &SnapshotEntry> + Clone + '_ {
        self.ledger.history.ordered_by_recency()
    }

    pub fn latest_snapshot(&self) -> Option<&SnapshotEntry> {
        self.ledger.history.latest()
    }

    pub fn goal(&self) -> Money {
        self.ledger.goal
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Final save, handing the store back.
    pub fn close(self) -> Result<S, StoreError> {
        self.flush()?;
        Ok(self.store)
    }
}
