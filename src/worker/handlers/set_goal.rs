use crate::{
    common::{error::LedgerError, event::Outcome, money::Money},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, raw: &str) -> Result<Outcome, LedgerError> {
    ledger.goal = Money::coerce(raw);
    tracing::debug!(goal = %ledger.goal, "goal updated");
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{common::money::Money, domain::ledger::Ledger};

    #[test]
    fn goal_is_coerced() {
        let mut ledger = Ledger::default();

        handle(&mut ledger, "15000").unwrap();
        assert_eq!(ledger.goal, Money::units(15000));

        handle(&mut ledger, "soon").unwrap();
        assert_eq!(ledger.goal, Money::zero());
    }
}
