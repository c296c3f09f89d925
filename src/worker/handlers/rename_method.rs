use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::{ledger::Ledger, payment_method::MethodId},
};

pub fn handle(ledger: &mut Ledger, id: MethodId, name: &str) -> Result<Outcome, LedgerError> {
    let position = super::position_of(ledger, id)?;
    ledger.methods.rename_method(position, name)?;
    tracing::debug!(%id, name = name.trim(), "payment method renamed");
    Ok(Outcome::Changed)
}
