use chrono::NaiveDate;

use crate::{
    common::{error::LedgerError, event::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, today: NaiveDate) -> Result<Outcome, LedgerError> {
    // total is recomputed here, after every earlier mutation has landed
    let total = ledger.total();
    let goal = ledger.goal;
    ledger.history.log_snapshot(total, goal, today);
    Ok(Outcome::Changed)
}
