use serde::{Deserialize, Serialize};

use crate::{
    common::{error::StoreError, money::Money},
    domain::{
        history::SnapshotHistory,
        ledger::Ledger,
        method_ledger::PaymentMethodLedger,
        payment_method::MethodId,
        snapshot::SnapshotEntry,
    },
};

/// Durable home of the ledger state. Implementations are called synchronously
/// by the ledger service once per applied intent.
pub trait LedgerStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<StoredState>, StoreError>;
    fn save(&self, state: &StoredState) -> Result<(), StoreError>;
}

// Lets a service borrow a store that the caller keeps inspecting.
impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> Result<Option<StoredState>, StoreError> {
        (**self).load()
    }

    fn save(&self, state: &StoredState) -> Result<(), StoreError> {
        (**self).save(state)
    }
}

/// The persisted document, one key per collection plus the goal scalar:
///
/// ```json
/// {
///   "paymentMethods": [{ "id": 1, "name": "QNB", "balance": "10000.0000" }],
///   "weeklySummary": [{ "date": "2024-01-08", "total": "1200.0000", "gainLoss": "200.0000", "remainder": "700.0000" }],
///   "financialGoal": "10000.0000"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default, rename = "paymentMethods")]
    pub payment_methods: Vec<StoredMethod>,
    #[serde(default, rename = "weeklySummary")]
    pub snapshots: Vec<SnapshotEntry>,
    #[serde(default, rename = "financialGoal", skip_serializing_if = "Option::is_none")]
    pub goal: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MethodId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub balance: Money,
}

impl StoredMethod {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: None,
            name: name.into(),
            balance,
        }
    }
}

impl StoredState {
    /// Snapshots are written oldest first so the file reads chronologically.
    pub fn capture(ledger: &Ledger) -> Self {
        let mut snapshots: Vec<SnapshotEntry> = ledger.history.ordered_by_recency().copied().collect();
        snapshots.reverse();

        Self {
            payment_methods: ledger
                .methods
                .iter()
                .map(|m| StoredMethod {
                    id: Some(m.id),
                    name: m.name.clone(),
                    balance: m.balance,
                })
                .collect(),
            snapshots,
            goal: Some(ledger.goal),
        }
    }

    /// Rebuilds the in-memory ledger; `default_goal` applies when the document
    /// has no goal.
    pub fn into_ledger(self, default_goal: Money) -> Ledger {
        let methods = PaymentMethodLedger::restore(
            self.payment_methods
                .into_iter()
                .map(|m| (m.id, m.name, m.balance)),
        );
        let history = SnapshotHistory::restore(self.snapshots);
        Ledger::new(methods, history, self.goal.unwrap_or(default_goal))
    }
}
