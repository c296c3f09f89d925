pub mod add_method;
pub mod delete_snapshot;
pub mod log_snapshot;
pub mod remove_method;
pub mod rename_method;
pub mod set_balance;
pub mod set_goal;

use crate::{
    common::error::LedgerError,
    domain::{ledger::Ledger, payment_method::MethodId},
};

/// Resolves an id to its current position. Shared by every handler that edits
/// an existing payment method.
pub(crate) fn position_of(ledger: &Ledger, id: MethodId) -> Result<usize, LedgerError> {
    ledger
        .methods
        .position_of(id)
        .ok_or(LedgerError::MethodNotFound(id))
}
