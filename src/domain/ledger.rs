use crate::{
    common::money::Money,
    domain::{history::SnapshotHistory, method_ledger::PaymentMethodLedger},
};

/// Complete in-memory state: payment methods, snapshot history and goal.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub methods: PaymentMethodLedger,
    pub history: SnapshotHistory,
    pub goal: Money,
}

impl Ledger {
    pub fn new(methods: PaymentMethodLedger, history: SnapshotHistory, goal: Money) -> Self {
        Self {
            methods,
            history,
            goal,
        }
    }

    pub fn total(&self) -> Money {
        self.methods.compute_total()
    }
}
