use chrono::NaiveDate;

use crate::domain::payment_method::MethodId;

/// A user action forwarded by the presentation layer. Amounts stay raw text
/// until a handler coerces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerIntent {
    AddMethod { name: String, balance: String },
    RenameMethod { id: MethodId, name: String },
    SetBalance { id: MethodId, raw: String },
    RemoveMethod { id: MethodId },
    SetGoal { raw: String },
    LogSnapshot { today: NaiveDate },
    DeleteSnapshot { date: NaiveDate },
}

/// What an intent did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}
