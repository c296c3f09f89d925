use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, name: &str, balance: &str) -> Result<Outcome, LedgerError> {
    // blank names are a silent no-op, not an error
    match ledger.methods.add_method(name, balance) {
        Some(_) => Ok(Outcome::Changed),
        None => Ok(Outcome::Unchanged),
    }
}
